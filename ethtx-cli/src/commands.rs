//! Command implementations.
//!
//! Each command returns a value for `main` to print, so the logic can be
//! exercised without a process.

use ethtx::crypto::format_address_checksummed;
use ethtx::{Buffer, EthAddress, Secp256k1, Transaction, TxError};
use ethtx_common::{ADDRESS_LEN, PRIVATE_KEY_LEN};
use serde::Serialize;
use zeroize::Zeroizing;

use crate::error::CliError;

/// Unsigned transaction fields as given on the command line.
#[derive(Debug, Default, Clone)]
pub struct SignRequest {
    pub nonce: Option<String>,
    pub gas_price: Option<String>,
    pub gas_limit: Option<String>,
    pub to: Option<String>,
    pub value: Option<String>,
    pub data: Option<String>,
    pub chain_id: String,
    pub from: Option<String>,
}

/// Result of `ethtx sign`.
#[derive(Debug, Serialize)]
pub struct SignOutput {
    pub raw: Buffer,
    pub hash: Buffer,
    pub v: Buffer,
    pub r: Buffer,
    pub s: Buffer,
    pub from: String,
}

/// Result of `ethtx decode`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeOutput {
    pub nonce: Buffer,
    pub gas_price: Buffer,
    pub gas_limit: Buffer,
    pub to: Buffer,
    pub value: Buffer,
    pub data: Buffer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<Buffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<Buffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<Buffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<Buffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<Buffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Builds and signs a transaction.
pub fn sign(private_key: &str, request: &SignRequest) -> Result<SignOutput, CliError> {
    let defaults = Transaction::default();
    let mut tx = Transaction::new(
        parse_quantity_or(request.nonce.as_deref(), defaults.nonce)?,
        parse_quantity_or(request.gas_price.as_deref(), defaults.gas_price)?,
        parse_quantity_or(request.gas_limit.as_deref(), defaults.gas_limit)?,
        match request.to.as_deref() {
            Some(to) => Buffer::from(parse_address(to)?),
            None => Buffer::new(),
        },
        parse_quantity_or(request.value.as_deref(), defaults.value)?,
        match request.data.as_deref() {
            Some(data) => parse_hex(data)?,
            None => Buffer::new(),
        },
    );
    let chain_id = parse_quantity(&request.chain_id)?;

    let raw = with_private_key(private_key, |key| Ok(tx.sign(key, &chain_id)?))?;

    let sender = address_of(&tx.sender()?)?;
    if let Some(expected) = request.from.as_deref() {
        if parse_address(expected)? != sender {
            return Err(CliError::SenderMismatch {
                expected: expected.to_string(),
                actual: format_address_checksummed(&sender),
            });
        }
    }

    let (v, r, s) = match (tx.v(), tx.r(), tx.s()) {
        (Some(v), Some(r), Some(s)) => (v.clone(), r.clone(), s.clone()),
        _ => return Err(TxError::NotSigned.into()),
    };

    Ok(SignOutput {
        hash: tx.tx_hash()?,
        raw,
        v,
        r,
        s,
        from: format_address_checksummed(&sender),
    })
}

/// Derives the checksummed address of a private key.
pub fn address(private_key: &str) -> Result<String, CliError> {
    let address = with_private_key(private_key, |key| {
        if key.len() != PRIVATE_KEY_LEN {
            return Err(TxError::InvalidKey.into());
        }
        let mut bytes = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
        bytes.copy_from_slice(key.as_bytes());
        let pubkey = Buffer::from(Secp256k1.public_key(&bytes)?);
        Ok(Transaction::public_key_to_address(&pubkey)?)
    })?;
    Ok(format_address_checksummed(&address_of(&address)?))
}

/// Decodes a raw legacy transaction.
pub fn decode(raw: &str) -> Result<DecodeOutput, CliError> {
    let raw = parse_hex(raw)?;
    let tx = Transaction::decode(raw.as_bytes())?;

    let (hash, from) = if tx.is_signed() {
        let sender = address_of(&tx.sender()?)?;
        (Some(tx.tx_hash()?), Some(format_address_checksummed(&sender)))
    } else {
        (None, None)
    };

    Ok(DecodeOutput {
        chain_id: tx.chain_id().cloned(),
        v: tx.v().cloned(),
        r: tx.r().cloned(),
        s: tx.s().cloned(),
        hash,
        from,
        nonce: tx.nonce,
        gas_price: tx.gas_price,
        gas_limit: tx.gas_limit,
        to: tx.to,
        value: tx.value,
        data: tx.data,
    })
}

/// Parses the key and runs `f`; the parsed key is wiped on drop.
fn with_private_key<T>(
    private_key: &str,
    f: impl FnOnce(&Buffer) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let key = Buffer::from_hex(private_key.trim()).map_err(|_| TxError::InvalidKey)?;
    let key = Zeroizing::new(key);
    f(&key)
}

/// Parses a quantity given as `0x` hex or decimal into minimal big-endian bytes.
pub fn parse_quantity(s: &str) -> Result<Buffer, CliError> {
    let s = s.trim();
    if s.starts_with("0x") || s.starts_with("0X") {
        let bytes = parse_hex(s)?.into_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        return Ok(Buffer::from(&bytes[start..]));
    }
    s.parse::<u128>()
        .map(Buffer::from_int)
        .map_err(|_| CliError::InvalidArgument(format!("not a quantity: {}", s)))
}

fn parse_quantity_or(s: Option<&str>, default: Buffer) -> Result<Buffer, CliError> {
    s.map_or(Ok(default), parse_quantity)
}

fn parse_hex(s: &str) -> Result<Buffer, CliError> {
    Buffer::from_hex(s.trim()).map_err(|_| CliError::InvalidArgument(format!("invalid hex: {}", s)))
}

/// Parses a 20-byte address, with or without checksum casing.
pub fn parse_address(s: &str) -> Result<EthAddress, CliError> {
    let bytes = parse_hex(s)?;
    if bytes.len() != ADDRESS_LEN {
        return Err(CliError::InvalidArgument(format!(
            "address must be {} bytes: {}",
            ADDRESS_LEN, s
        )));
    }
    address_of(&bytes)
}

fn address_of(bytes: &Buffer) -> Result<EthAddress, CliError> {
    EthAddress::try_from(bytes.as_bytes()).map_err(|_| TxError::InvalidInput.into())
}
