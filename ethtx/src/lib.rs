//! Offline signing of legacy Ethereum transactions.
//!
//! Given the six transaction fields and a private key, this crate produces
//! the RLP-encoded, ECDSA-signed raw transaction ready for broadcast.
//!
//! # Architecture
//!
//! ```text
//! fields -> RLP (unsigned, EIP-155 placeholders) -> keccak256
//!        -> recoverable ECDSA -> v/r/s -> RLP (signed) -> raw bytes
//! ```
//!
//! - [`rlp`]: canonical RLP encoder and decoder
//! - [`crypto`]: Keccak256, address derivation, v value arithmetic
//! - [`signer`]: the signing primitive seam and its secp256k1 implementation
//! - [`transaction`]: the legacy transaction and its signing protocol
//!
//! # Example
//!
//! ```
//! use ethtx::{Buffer, Transaction};
//!
//! # fn main() -> Result<(), ethtx::TxError> {
//! let private_key = Buffer::from_hex(
//!     "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318",
//! )?;
//! let mut tx = Transaction::new(
//!     Buffer::from_hex("0x2e")?,
//!     Buffer::from_hex("0x033428f000")?,
//!     Buffer::from_hex("0x02350c")?,
//!     Buffer::from_hex("0x744d70fdbe2ba4cf95131626614a1763df805b9e")?,
//!     Buffer::from_int(0),
//!     Buffer::new(),
//! );
//! let raw = tx.sign(&private_key, &Buffer::from_int(1))?;
//! assert_eq!(raw.as_bytes()[0], 0xf8);
//! assert_eq!(
//!     tx.sender()?.to_hex(),
//!     "2c7536e3605d9c16a7a3d7b1898e529396a65c23"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Docs consulted
//!
//! - Ethereum yellow paper, appendix B (RLP)
//! - EIP-155: Simple replay attack protection
//! - EIP-55: Mixed-case checksum address encoding

pub mod crypto;
pub mod rlp;
pub mod signer;
pub mod transaction;

pub use ethtx_common::{
    Buffer, EthAddress, Hash256, RecoverableSignature, TxError, UncompressedPublicKey,
};
pub use rlp::{RlpError, RlpItem};
pub use signer::{EcdsaSigner, Secp256k1};
pub use transaction::Transaction;
