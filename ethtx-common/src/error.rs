//! Error types for transaction encoding and signing.
//!
//! Error codes are stable so that callers (and the CLI exit status) can
//! report them without carrying strings around.

use core::fmt;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

/// Error codes for transaction encoding, signing and recovery.
///
/// Messages are intentionally terse; none of them carry key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[repr(u32)]
pub enum TxError {
    /// Malformed input value (bad hex, out-of-range slice, wrong length).
    InvalidInput = 0x01,

    /// RLP length prefix exceeds the 8-byte length-of-length capacity.
    LengthOverflow = 0x02,

    /// Private key is not a valid 32-byte secp256k1 scalar.
    InvalidKey = 0x03,

    /// Signing primitive reported failure.
    SigningFailure = 0x04,

    /// Public key recovery reported failure.
    RecoveryFailure = 0x05,

    /// Integer does not fit in 128 bits.
    IntegerOverflow = 0x06,

    /// Operation needs v/r/s but the transaction is unsigned.
    NotSigned = 0x07,

    /// Malformed or non-canonical RLP.
    InvalidRlp = 0x08,

    /// RLP is well formed but is not a legacy transaction.
    InvalidTransaction = 0x09,

    /// Signature is not 65 bytes or has a bad recovery id.
    InvalidSignature = 0x0A,
}

impl TxError {
    /// Returns the error code as a u32.
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Looks up an error from its code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }

    /// Returns true if the failure came from the signing primitive or key.
    #[inline]
    pub fn is_crypto_error(self) -> bool {
        matches!(
            self,
            TxError::InvalidKey
                | TxError::SigningFailure
                | TxError::RecoveryFailure
                | TxError::InvalidSignature
        )
    }
}

impl fmt::Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxError::InvalidInput => write!(f, "Invalid input"),
            TxError::LengthOverflow => write!(f, "RLP length overflow"),
            TxError::InvalidKey => write!(f, "Invalid private key"),
            TxError::SigningFailure => write!(f, "Signing failed"),
            TxError::RecoveryFailure => write!(f, "Public key recovery failed"),
            TxError::IntegerOverflow => write!(f, "Integer overflow"),
            TxError::NotSigned => write!(f, "Transaction is not signed"),
            TxError::InvalidRlp => write!(f, "Invalid RLP"),
            TxError::InvalidTransaction => write!(f, "Invalid transaction"),
            TxError::InvalidSignature => write!(f, "Invalid signature"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TxError {}
