//! Recoverable ECDSA signing primitive.
//!
//! The transaction only needs two operations from the curve library:
//! sign a 32-byte hash and recover the public key from a signature.
//! [`EcdsaSigner`] is that seam; [`Secp256k1`] implements it with `k256`.
//!
//! # Security
//!
//! - k256 signing is constant-time and uses RFC 6979 deterministic nonces
//! - Signatures are low-S normalized (the recovery id is adjusted to match)
//! - Private key copies are zeroized on drop

use ethtx_common::{
    Hash256, RecoverableSignature, TxError, UncompressedPublicKey, PRIVATE_KEY_LEN,
    PUBLIC_KEY_LEN,
};
use k256::{
    ecdsa::{RecoveryId, Signature as K256Signature, SigningKey, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
    PublicKey,
};
use zeroize::Zeroizing;

/// Stateless recoverable-ECDSA primitive over secp256k1.
pub trait EcdsaSigner {
    /// Sign a prehashed message, returning r || s and the recovery id.
    fn sign(
        &self,
        hash: &Hash256,
        private_key: &[u8; PRIVATE_KEY_LEN],
    ) -> Result<RecoverableSignature, TxError>;

    /// Recover the uncompressed public key that produced `signature`.
    fn recover(
        &self,
        signature: &RecoverableSignature,
        hash: &Hash256,
    ) -> Result<UncompressedPublicKey, TxError>;
}

/// secp256k1 signer backed by the `k256` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1;

impl Secp256k1 {
    /// Derive the uncompressed public key for a private key.
    pub fn public_key(
        &self,
        private_key: &[u8; PRIVATE_KEY_LEN],
    ) -> Result<UncompressedPublicKey, TxError> {
        let signing_key = signing_key(private_key)?;
        let public_key: PublicKey = signing_key.verifying_key().into();
        Ok(uncompressed(&public_key))
    }
}

impl EcdsaSigner for Secp256k1 {
    fn sign(
        &self,
        hash: &Hash256,
        private_key: &[u8; PRIVATE_KEY_LEN],
    ) -> Result<RecoverableSignature, TxError> {
        let signing_key = signing_key(private_key)?;

        let (sig, recid) = signing_key
            .sign_prehash_recoverable(hash)
            .map_err(|_| TxError::SigningFailure)?;

        let mut compact = [0u8; 64];
        compact.copy_from_slice(&sig.to_bytes());

        Ok(RecoverableSignature {
            compact,
            recovery_id: recid.to_byte(),
        })
    }

    fn recover(
        &self,
        signature: &RecoverableSignature,
        hash: &Hash256,
    ) -> Result<UncompressedPublicKey, TxError> {
        let sig = K256Signature::from_slice(&signature.compact)
            .map_err(|_| TxError::RecoveryFailure)?;
        let recid =
            RecoveryId::from_byte(signature.recovery_id).ok_or(TxError::RecoveryFailure)?;

        let verifying_key = VerifyingKey::recover_from_prehash(hash, &sig, recid)
            .map_err(|_| TxError::RecoveryFailure)?;

        Ok(uncompressed(&PublicKey::from(&verifying_key)))
    }
}

/// Build a k256 signing key from raw bytes, wiping the copy afterwards.
fn signing_key(private_key: &[u8; PRIVATE_KEY_LEN]) -> Result<SigningKey, TxError> {
    let bytes = Zeroizing::new(*private_key);
    SigningKey::from_slice(bytes.as_slice()).map_err(|_| TxError::InvalidKey)
}

fn uncompressed(public_key: &PublicKey) -> UncompressedPublicKey {
    let encoded = public_key.to_encoded_point(false);
    let mut out = [0u8; PUBLIC_KEY_LEN];
    out.copy_from_slice(encoded.as_bytes());
    out
}
