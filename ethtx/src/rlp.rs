//! RLP (Recursive Length Prefix) codec.
//!
//! RLP is the serialization used for every Ethereum transaction. An item
//! is either a byte string or a list of items.
//!
//! # Encoding rules
//!
//! - Single byte [0x00, 0x7f]: itself, except 0x00 which is the empty string
//! - String [0x80, 0xb7]: 0x80 + len, then data
//! - String [0xb8, 0xbf]: 0xb7 + len_of_len, then len, then data
//! - List [0xc0, 0xf7]: 0xc0 + len, then items
//! - List [0xf8, 0xff]: 0xf7 + len_of_len, then len, then items
//!
//! Integer fields are stored minimal (zero is empty) so a lone 0x00 byte
//! only appears when a caller passes raw bytes; it is encoded like zero.
//!
//! # Decoding
//!
//! - Validates all length fields before access
//! - Rejects non-canonical encodings
//! - Bounded recursion depth (max 16)

use ethtx_common::{Buffer, TxError};

/// Maximum RLP nesting depth accepted by the decoder.
const MAX_DEPTH: usize = 16;

/// Prefix offset for byte strings.
const STRING_OFFSET: u8 = 0x80;

/// Prefix offset for lists.
const LIST_OFFSET: u8 = 0xc0;

/// Lengths up to this bound use the single-byte short form.
const SHORT_LIMIT: usize = 56;

// A length always fits the 8-byte long form when usize is at most 64 bits,
// which makes the overflow branch of the length prefix unreachable.
const _: () = assert!(usize::BITS <= 64);

/// RLP decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RlpError {
    /// Input is empty when data expected.
    EmptyInput,
    /// Input too short for declared length.
    UnexpectedEof,
    /// Non-canonical encoding (leading zeros or long form for short data).
    NonCanonical,
    /// Single byte should be encoded as itself.
    SingleByteMismatch,
    /// Length field is too large.
    LengthOverflow,
    /// Exceeded maximum nesting depth.
    TooDeep,
    /// Extra data after RLP item.
    TrailingData,
}

impl From<RlpError> for TxError {
    fn from(e: RlpError) -> Self {
        match e {
            RlpError::LengthOverflow => TxError::LengthOverflow,
            _ => TxError::InvalidRlp,
        }
    }
}

/// An RLP item: a byte string or a list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpItem {
    /// A byte string (may be empty).
    Bytes(Buffer),
    /// A list of items.
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Returns true if this is a list item.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, RlpItem::List(_))
    }

    /// Returns the bytes if this is a string item.
    pub fn as_bytes(&self) -> Option<&Buffer> {
        match self {
            RlpItem::Bytes(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the list items if this is a list item.
    pub fn as_list(&self) -> Option<&[RlpItem]> {
        match self {
            RlpItem::List(items) => Some(items),
            _ => None,
        }
    }

    /// Converts string data to an integer (big-endian, canonical).
    pub fn as_u128(&self) -> Option<u128> {
        let data = self.as_bytes()?.as_bytes();
        // Check for non-canonical (leading zeros)
        if data.len() > 1 && data[0] == 0 {
            return None;
        }
        Buffer::from(data).to_int().ok()
    }
}

impl From<Buffer> for RlpItem {
    fn from(data: Buffer) -> Self {
        RlpItem::Bytes(data)
    }
}

impl From<&Buffer> for RlpItem {
    fn from(data: &Buffer) -> Self {
        RlpItem::Bytes(data.clone())
    }
}

impl From<Vec<RlpItem>> for RlpItem {
    fn from(items: Vec<RlpItem>) -> Self {
        RlpItem::List(items)
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Encodes an item into its canonical RLP bytes.
pub fn encode(item: &RlpItem) -> Buffer {
    let mut out = Vec::new();
    encode_into(item, &mut out);
    Buffer::from(out)
}

fn encode_into(item: &RlpItem, out: &mut Vec<u8>) {
    match item {
        RlpItem::Bytes(data) => {
            let bytes = data.as_bytes();
            // The zero byte must be tested first: it is below 0x80 too.
            if bytes == [0x00] {
                out.push(STRING_OFFSET);
            } else if bytes.len() == 1 && bytes[0] < STRING_OFFSET {
                out.push(bytes[0]);
            } else {
                out.extend_from_slice(&encode_length(bytes.len(), STRING_OFFSET));
                out.extend_from_slice(bytes);
            }
        }
        RlpItem::List(items) => {
            let mut payload = Vec::new();
            for child in items {
                encode_into(child, &mut payload);
            }
            out.extend_from_slice(&encode_length(payload.len(), LIST_OFFSET));
            out.extend_from_slice(&payload);
        }
    }
}

/// Encodes the length prefix for a payload of `length` bytes.
///
/// `offset` is 0x80 for strings and 0xc0 for lists.
pub fn encode_length(length: usize, offset: u8) -> Vec<u8> {
    if length < SHORT_LIMIT {
        return vec![offset + length as u8];
    }

    let len_bytes = Buffer::from_int(length as u128);
    let mut prefix = Vec::with_capacity(1 + len_bytes.len());
    prefix.push(offset + 55 + len_bytes.len() as u8);
    prefix.extend_from_slice(len_bytes.as_bytes());
    prefix
}

// =============================================================================
// Decoding
// =============================================================================

/// Decodes one RLP item from the input, returning the remaining bytes.
pub fn decode(input: &[u8]) -> Result<(RlpItem, &[u8]), RlpError> {
    decode_internal(input, 0)
}

/// Decodes a complete RLP item, rejecting trailing data.
pub fn decode_exact(input: &[u8]) -> Result<RlpItem, RlpError> {
    let (item, rest) = decode(input)?;
    if !rest.is_empty() {
        return Err(RlpError::TrailingData);
    }
    Ok(item)
}

/// Internal decode with depth tracking.
fn decode_internal(input: &[u8], depth: usize) -> Result<(RlpItem, &[u8]), RlpError> {
    if depth > MAX_DEPTH {
        return Err(RlpError::TooDeep);
    }

    let first = *input.first().ok_or(RlpError::EmptyInput)?;

    match first {
        // Single byte
        0x00..=0x7f => Ok((RlpItem::Bytes(Buffer::from(&input[..1])), &input[1..])),

        // Short string (0-55 bytes)
        0x80..=0xb7 => {
            let len = (first - 0x80) as usize;
            let (data, rest) = split_payload(input, 1, len)?;

            if len == 1 && data[0] < 0x80 {
                return Err(RlpError::SingleByteMismatch);
            }

            Ok((RlpItem::Bytes(Buffer::from(data)), rest))
        }

        // Long string (56+ bytes)
        0xb8..=0xbf => {
            let len_of_len = (first - 0xb7) as usize;
            let len = decode_long_length(input, len_of_len)?;
            let (data, rest) = split_payload(input, 1 + len_of_len, len)?;
            Ok((RlpItem::Bytes(Buffer::from(data)), rest))
        }

        // Short list (0-55 bytes total)
        0xc0..=0xf7 => {
            let len = (first - 0xc0) as usize;
            let (list_data, rest) = split_payload(input, 1, len)?;
            let items = decode_list_items(list_data, depth + 1)?;
            Ok((RlpItem::List(items), rest))
        }

        // Long list (56+ bytes total)
        0xf8..=0xff => {
            let len_of_len = (first - 0xf7) as usize;
            let len = decode_long_length(input, len_of_len)?;
            let (list_data, rest) = split_payload(input, 1 + len_of_len, len)?;
            let items = decode_list_items(list_data, depth + 1)?;
            Ok((RlpItem::List(items), rest))
        }
    }
}

/// Reads the big-endian length that follows a long-form prefix byte.
fn decode_long_length(input: &[u8], len_of_len: usize) -> Result<usize, RlpError> {
    let len_bytes = input
        .get(1..1 + len_of_len)
        .ok_or(RlpError::UnexpectedEof)?;

    // Check for non-canonical (leading zeros)
    if len_bytes[0] == 0 {
        return Err(RlpError::NonCanonical);
    }

    let len = decode_length(len_bytes)?;

    // Short payloads must use the short form
    if len < SHORT_LIMIT {
        return Err(RlpError::NonCanonical);
    }

    Ok(len)
}

/// Splits `len` payload bytes starting at `start` from the rest of the input.
fn split_payload(input: &[u8], start: usize, len: usize) -> Result<(&[u8], &[u8]), RlpError> {
    let end = start.checked_add(len).ok_or(RlpError::LengthOverflow)?;
    if input.len() < end {
        return Err(RlpError::UnexpectedEof);
    }
    Ok((&input[start..end], &input[end..]))
}

/// Decodes a big-endian length value.
fn decode_length(bytes: &[u8]) -> Result<usize, RlpError> {
    if bytes.len() > 8 {
        return Err(RlpError::LengthOverflow);
    }

    let mut len = 0usize;
    for &byte in bytes {
        len = len.checked_shl(8).ok_or(RlpError::LengthOverflow)?;
        len = len.checked_add(byte as usize).ok_or(RlpError::LengthOverflow)?;
    }

    Ok(len)
}

/// Decodes all items in a list.
fn decode_list_items(mut data: &[u8], depth: usize) -> Result<Vec<RlpItem>, RlpError> {
    let mut items = Vec::new();

    while !data.is_empty() {
        let (item, rest) = decode_internal(data, depth)?;
        items.push(item);
        data = rest;
    }

    Ok(items)
}
