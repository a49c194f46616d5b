//! Fixed-width types shared by the signer and its callers.

use crate::{Buffer, TxError};

/// Private key length (secp256k1 scalar).
pub const PRIVATE_KEY_LEN: usize = 32;

/// Keccak256 digest length.
pub const HASH_LEN: usize = 32;

/// Recoverable signature length (r || s || recovery id).
pub const SIGNATURE_LEN: usize = 65;

/// Uncompressed SEC1 public key length (0x04 || x || y).
pub const PUBLIC_KEY_LEN: usize = 65;

/// Ethereum address length.
pub const ADDRESS_LEN: usize = 20;

/// Maximum raw transaction size accepted by the decoder (64KB).
pub const MAX_TX_SIZE: usize = 65536;

/// Ethereum address (20 bytes).
pub type EthAddress = [u8; ADDRESS_LEN];

/// Keccak256 hash (32 bytes).
pub type Hash256 = [u8; HASH_LEN];

/// Uncompressed secp256k1 public key (65 bytes).
pub type UncompressedPublicKey = [u8; PUBLIC_KEY_LEN];

// =============================================================================
// Signature
// =============================================================================

/// Recoverable ECDSA signature as produced by the signing primitive.
///
/// `compact` is r || s (32 bytes each, big-endian); `recovery_id` is 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// Compact r || s serialization.
    pub compact: [u8; 64],
    /// Recovery identifier (0 or 1).
    pub recovery_id: u8,
}

impl RecoverableSignature {
    /// R component.
    pub fn r(&self) -> &[u8] {
        &self.compact[..32]
    }

    /// S component.
    pub fn s(&self) -> &[u8] {
        &self.compact[32..]
    }

    /// Returns the 65-byte r || s || recovery id layout.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..64].copy_from_slice(&self.compact);
        bytes[64] = self.recovery_id;
        bytes
    }

    /// Returns the 65-byte layout as a [`Buffer`].
    pub fn to_buffer(&self) -> Buffer {
        Buffer::from(self.to_bytes())
    }

    /// Parses the 65-byte r || s || recovery id layout.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TxError> {
        if bytes.len() != SIGNATURE_LEN || bytes[64] > 1 {
            return Err(TxError::InvalidSignature);
        }
        let mut compact = [0u8; 64];
        compact.copy_from_slice(&bytes[..64]);
        Ok(Self {
            compact,
            recovery_id: bytes[64],
        })
    }
}
