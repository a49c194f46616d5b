//! Hashing and signature arithmetic for Ethereum transactions.
//!
//! This module provides:
//! - Keccak256 hashing (Ethereum's hash function)
//! - Address derivation from an uncompressed public key
//! - EIP-55 checksummed address formatting
//! - EIP-155 v value computation and its inverse

use ethtx_common::{EthAddress, Hash256, TxError, UncompressedPublicKey};
use tiny_keccak::{Hasher as KeccakHasher, Keccak};

// =============================================================================
// Keccak256
// =============================================================================

/// Keccak256 hash function as used by Ethereum.
///
/// This is the original Keccak padding, not NIST SHA3-256.
pub fn keccak256(data: &[u8]) -> Hash256 {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

// =============================================================================
// Addresses
// =============================================================================

/// Get Ethereum address from an uncompressed public key.
///
/// Address = keccak256(pubkey[1..])[12..32]
/// (Skip the 0x04 prefix of uncompressed key, take last 20 bytes of hash)
pub fn public_key_to_address(pubkey: &UncompressedPublicKey) -> EthAddress {
    let hash = keccak256(&pubkey[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Format address with EIP-55 checksum.
pub fn format_address_checksummed(address: &EthAddress) -> String {
    let hex_lower = hex::encode(address);
    let hash = keccak256(hex_lower.as_bytes());

    let mut result = String::with_capacity(42);
    result.push_str("0x");

    for (i, c) in hex_lower.chars().enumerate() {
        let hash_byte = hash[i / 2];
        let nibble = if i % 2 == 0 {
            hash_byte >> 4
        } else {
            hash_byte & 0x0F
        };

        if c.is_ascii_alphabetic() && nibble >= 8 {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
    }

    result
}

// =============================================================================
// V Value Computation
// =============================================================================

/// Compute the v value from recovery ID.
///
/// - With chain ID (EIP-155): v = recovery_id + 35 + chain_id * 2
/// - Without chain ID (chain_id == 0): v = recovery_id + 27
pub fn compute_v(recovery_id: u8, chain_id: u128) -> Result<u128, TxError> {
    if chain_id > 0 {
        chain_id
            .checked_mul(2)
            .and_then(|x| x.checked_add(35))
            .and_then(|x| x.checked_add(recovery_id as u128))
            .ok_or(TxError::IntegerOverflow)
    } else {
        Ok(27 + recovery_id as u128)
    }
}

/// Split a v value into (chain_id, recovery_id).
///
/// 27/28 are pre-EIP-155 and give chain ID 0.
pub fn split_v(v: u128) -> Result<(u128, u8), TxError> {
    match v {
        27 | 28 => Ok((0, (v - 27) as u8)),
        v if v >= 37 => Ok(((v - 35) / 2, ((v - 35) % 2) as u8)),
        _ => Err(TxError::InvalidTransaction),
    }
}
