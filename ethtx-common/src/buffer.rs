//! Immutable byte buffer used for every transaction field.
//!
//! Integers are stored big-endian with no leading zero byte; zero is the
//! empty buffer. Bytes built from hex or raw slices are kept verbatim.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use zeroize::Zeroize;

use crate::TxError;

/// An ordered, immutable sequence of bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Buffer(Vec<u8>);

impl Buffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a hex string, with or without a `0x` prefix.
    ///
    /// An odd number of digits is read as if a leading `0` were present,
    /// so `"0x1"` gives `[0x01]`.
    pub fn from_hex(s: &str) -> Result<Self, TxError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if !digits.is_ascii() {
            return Err(TxError::InvalidInput);
        }

        // An odd leading digit becomes its own byte; no padded copy is made.
        let (head, tail) = digits.split_at(digits.len() % 2);
        let mut bytes = vec![0u8; head.len() + tail.len() / 2];
        if !head.is_empty() {
            bytes[0] = u8::from_str_radix(head, 16).map_err(|_| TxError::InvalidInput)?;
        }
        hex::decode_to_slice(tail, &mut bytes[head.len()..]).map_err(|_| TxError::InvalidInput)?;

        Ok(Self(bytes))
    }

    /// Encodes an integer as minimal big-endian bytes (zero is empty).
    pub fn from_int(value: u128) -> Self {
        let bytes = value.to_be_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        Self(bytes[start..].to_vec())
    }

    /// Wraps raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Lower-case hex without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Reads the buffer as a big-endian unsigned integer.
    ///
    /// Leading zero bytes are ignored; an empty buffer is zero.
    pub fn to_int(&self) -> Result<u128, TxError> {
        let start = self.0.iter().position(|&b| b != 0).unwrap_or(self.0.len());
        let significant = &self.0[start..];
        if significant.len() > 16 {
            return Err(TxError::IntegerOverflow);
        }

        let mut value = 0u128;
        for &byte in significant {
            value = value << 8 | byte as u128;
        }
        Ok(value)
    }

    /// Returns `length` bytes starting at `offset` (or the rest when `None`).
    pub fn slice(&self, offset: usize, length: Option<usize>) -> Result<Buffer, TxError> {
        let end = match length {
            Some(len) => offset.checked_add(len).ok_or(TxError::InvalidInput)?,
            None => self.0.len(),
        };
        if offset > end || end > self.0.len() {
            return Err(TxError::InvalidInput);
        }
        Ok(Self(self.0[offset..end].to_vec()))
    }

    /// Borrows the underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the buffer, returning its bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Buffer {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Zeroize for Buffer {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer({})", self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Buffer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Buffer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl serde::de::Visitor<'_> for HexVisitor {
            type Value = Buffer;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a hex string")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Buffer, E> {
                Buffer::from_hex(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
