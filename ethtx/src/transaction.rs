//! Legacy Ethereum transaction and its signing protocol.
//!
//! Field order on the wire:
//!
//! ```text
//! unsigned:          [nonce, gasPrice, gasLimit, to, value, data]
//! EIP-155 unsigned:  [nonce, gasPrice, gasLimit, to, value, data, chainId, 0, 0]
//! signed:            [nonce, gasPrice, gasLimit, to, value, data, v, r, s]
//! ```
//!
//! # Security
//!
//! Raw transactions handed to [`Transaction::decode`] are untrusted:
//! - Size is bounded by `MAX_TX_SIZE` before any parsing
//! - Typed (EIP-2718) envelopes are rejected, not guessed at
//! - `sign` fails closed and leaves earlier signature fields untouched

use ethtx_common::{
    Buffer, RecoverableSignature, TxError, ADDRESS_LEN, HASH_LEN, MAX_TX_SIZE,
    PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SIGNATURE_LEN,
};
use zeroize::Zeroizing;

use crate::crypto::{self, compute_v, keccak256, split_v};
use crate::rlp::{self, RlpItem};
use crate::signer::{EcdsaSigner, Secp256k1};

/// Nonce used when none is set.
pub const DEFAULT_NONCE: u128 = 1;

/// Gas price used when none is set (10^13 wei).
pub const DEFAULT_GAS_PRICE: u128 = 10_000_000_000_000;

/// Gas limit used when none is set.
pub const DEFAULT_GAS_LIMIT: u128 = 196_608;

/// Length of each of r and s.
const SCALAR_LEN: usize = 32;

/// A legacy (pre-EIP-2718) Ethereum transaction.
///
/// The six unsigned fields are public; the signature fields are only set
/// by [`Transaction::sign`] or [`Transaction::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Sender account nonce.
    pub nonce: Buffer,
    /// Gas price in wei.
    pub gas_price: Buffer,
    /// Gas limit.
    pub gas_limit: Buffer,
    /// Recipient address (empty for contract creation).
    pub to: Buffer,
    /// Value in wei.
    pub value: Buffer,
    /// Call data.
    pub data: Buffer,
    v: Option<Buffer>,
    r: Option<Buffer>,
    s: Option<Buffer>,
    chain_id: Option<Buffer>,
    chain_id_mul: Option<u128>,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            nonce: Buffer::from_int(DEFAULT_NONCE),
            gas_price: Buffer::from_int(DEFAULT_GAS_PRICE),
            gas_limit: Buffer::from_int(DEFAULT_GAS_LIMIT),
            to: Buffer::new(),
            value: Buffer::new(),
            data: Buffer::new(),
            v: None,
            r: None,
            s: None,
            chain_id: None,
            chain_id_mul: None,
        }
    }
}

impl Transaction {
    /// Creates an unsigned transaction from its six fields.
    pub fn new(
        nonce: Buffer,
        gas_price: Buffer,
        gas_limit: Buffer,
        to: Buffer,
        value: Buffer,
        data: Buffer,
    ) -> Self {
        Self {
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            data,
            ..Self::default()
        }
    }

    /// Returns the unsigned fields in wire order.
    pub fn input(&self) -> [(&'static str, &Buffer); 6] {
        [
            ("nonce", &self.nonce),
            ("gasPrice", &self.gas_price),
            ("gasLimit", &self.gas_limit),
            ("to", &self.to),
            ("value", &self.value),
            ("data", &self.data),
        ]
    }

    fn input_items(&self) -> Vec<RlpItem> {
        self.input()
            .iter()
            .map(|(_, field)| RlpItem::from(*field))
            .collect()
    }

    /// Computes the signing hash for `chain_id`.
    ///
    /// A positive chain id appends `[chainId, 0, 0]` to the payload
    /// (EIP-155); zero signs the six base fields only. The chain id
    /// buffer is encoded as given.
    pub fn hash(&self, chain_id: &Buffer) -> Result<Buffer, TxError> {
        let chain = chain_id.to_int()?;

        let mut items = self.input_items();
        if chain > 0 {
            items.push(RlpItem::from(chain_id));
            items.push(RlpItem::Bytes(Buffer::new()));
            items.push(RlpItem::Bytes(Buffer::new()));
        }

        let payload = rlp::encode(&RlpItem::List(items));
        log::trace!("signing payload: {} bytes", payload.len());

        Ok(Buffer::from(keccak256(payload.as_bytes())))
    }

    /// Signs a 32-byte hash with the default secp256k1 signer.
    ///
    /// Returns r || s || recovery id (65 bytes).
    pub fn signature(hash: &Buffer, private_key: &Buffer) -> Result<Buffer, TxError> {
        Self::signature_with(&Secp256k1, hash, private_key)
    }

    /// Signs a 32-byte hash with the given signer.
    pub fn signature_with<S: EcdsaSigner>(
        signer: &S,
        hash: &Buffer,
        private_key: &Buffer,
    ) -> Result<Buffer, TxError> {
        if private_key.len() != PRIVATE_KEY_LEN {
            return Err(TxError::InvalidKey);
        }
        let hash = hash_array(hash)?;

        let mut key = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
        key.copy_from_slice(private_key.as_bytes());

        let sig = signer.sign(&hash, &key)?;
        Ok(sig.to_buffer())
    }

    /// Signs the transaction and returns the raw signed bytes.
    pub fn sign(&mut self, private_key: &Buffer, chain_id: &Buffer) -> Result<Buffer, TxError> {
        self.sign_with(&Secp256k1, private_key, chain_id)
    }

    /// Signs the transaction with the given signer.
    ///
    /// Signing again overwrites the previous signature. On error the
    /// transaction is left as it was.
    pub fn sign_with<S: EcdsaSigner>(
        &mut self,
        signer: &S,
        private_key: &Buffer,
        chain_id: &Buffer,
    ) -> Result<Buffer, TxError> {
        let chain = chain_id.to_int()?;
        let chain_id_mul = chain.checked_mul(2).ok_or(TxError::IntegerOverflow)?;

        let hash = self.hash(chain_id)?;
        log::debug!("signing hash 0x{} (chain id {})", hash.to_hex(), chain);

        let sig = Self::signature_with(signer, &hash, private_key)?;
        let r = sig.slice(0, Some(SCALAR_LEN))?;
        let s = sig.slice(SCALAR_LEN, Some(SCALAR_LEN))?;
        let recovery_id = sig.as_bytes()[SIGNATURE_LEN - 1];

        let v = compute_v(recovery_id, chain)?;
        log::debug!("v = {} (recovery id {})", v, recovery_id);

        self.chain_id = Some(chain_id.clone());
        self.chain_id_mul = Some(chain_id_mul);
        self.v = Some(Buffer::from_int(v));
        self.r = Some(r);
        self.s = Some(s);

        self.with_signature()
    }

    /// Encodes the signed nine-field transaction.
    pub fn with_signature(&self) -> Result<Buffer, TxError> {
        let (v, r, s) = match (&self.v, &self.r, &self.s) {
            (Some(v), Some(r), Some(s)) => (v, r, s),
            _ => return Err(TxError::NotSigned),
        };

        let mut items = self.input_items();
        items.push(RlpItem::from(v));
        items.push(RlpItem::from(r));
        items.push(RlpItem::from(s));

        Ok(rlp::encode(&RlpItem::List(items)))
    }

    /// Recovers the uncompressed public key from a hash and 65-byte signature.
    pub fn recover_public_key(hash: &Buffer, signature: &Buffer) -> Result<Buffer, TxError> {
        Self::recover_public_key_with(&Secp256k1, hash, signature)
    }

    /// Recovers the public key with the given signer.
    pub fn recover_public_key_with<S: EcdsaSigner>(
        signer: &S,
        hash: &Buffer,
        signature: &Buffer,
    ) -> Result<Buffer, TxError> {
        let hash = hash_array(hash)?;
        let signature = RecoverableSignature::from_slice(signature.as_bytes())?;
        let pubkey = signer.recover(&signature, &hash)?;
        Ok(Buffer::from(pubkey))
    }

    /// Derives the 20-byte address of a 65-byte uncompressed public key.
    pub fn public_key_to_address(public_key: &Buffer) -> Result<Buffer, TxError> {
        if public_key.len() != PUBLIC_KEY_LEN {
            return Err(TxError::InvalidInput);
        }
        let mut pubkey = [0u8; PUBLIC_KEY_LEN];
        pubkey.copy_from_slice(public_key.as_bytes());
        Ok(Buffer::from(crypto::public_key_to_address(&pubkey)))
    }

    // =========================================================================
    // Signature state
    // =========================================================================

    /// Returns true once v, r and s are all set.
    pub fn is_signed(&self) -> bool {
        self.v.is_some() && self.r.is_some() && self.s.is_some()
    }

    pub fn v(&self) -> Option<&Buffer> {
        self.v.as_ref()
    }

    pub fn r(&self) -> Option<&Buffer> {
        self.r.as_ref()
    }

    pub fn s(&self) -> Option<&Buffer> {
        self.s.as_ref()
    }

    /// Chain id used by the last signature, or carried by a decoded transaction.
    pub fn chain_id(&self) -> Option<&Buffer> {
        self.chain_id.as_ref()
    }

    /// Twice the chain id, as used in the v computation.
    pub fn chain_id_mul(&self) -> Option<u128> {
        self.chain_id_mul
    }

    /// Recovery id encoded in v.
    pub fn recovery_id(&self) -> Result<u8, TxError> {
        let v = self.v.as_ref().ok_or(TxError::NotSigned)?;
        let (_, recovery_id) = split_v(v.to_int()?)?;
        Ok(recovery_id)
    }

    /// Recovers the address that signed this transaction.
    pub fn sender(&self) -> Result<Buffer, TxError> {
        let (v, r, s) = match (&self.v, &self.r, &self.s) {
            (Some(v), Some(r), Some(s)) => (v, r, s),
            _ => return Err(TxError::NotSigned),
        };
        let (chain, recovery_id) = split_v(v.to_int()?)?;

        let mut sig = Vec::with_capacity(SIGNATURE_LEN);
        sig.extend_from_slice(&left_pad(r)?);
        sig.extend_from_slice(&left_pad(s)?);
        sig.push(recovery_id);

        let hash = self.hash(&Buffer::from_int(chain))?;
        let pubkey = Self::recover_public_key(&hash, &Buffer::from(sig))?;
        Self::public_key_to_address(&pubkey)
    }

    /// Hash of the signed encoding, as indexed by the network.
    pub fn tx_hash(&self) -> Result<Buffer, TxError> {
        let raw = self.with_signature()?;
        Ok(Buffer::from(keccak256(raw.as_bytes())))
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    /// Parses a raw legacy transaction (unsigned, EIP-155 unsigned or signed).
    pub fn decode(raw: &[u8]) -> Result<Self, TxError> {
        Self::decode_legacy(raw).map_err(|e| {
            log::warn!("rejected raw transaction ({} bytes): {}", raw.len(), e);
            e
        })
    }

    fn decode_legacy(raw: &[u8]) -> Result<Self, TxError> {
        if raw.len() > MAX_TX_SIZE {
            return Err(TxError::InvalidTransaction);
        }
        // A legacy transaction is an RLP list; anything else is either a
        // typed envelope (first byte is the type) or not a transaction.
        match raw.first() {
            Some(&b) if b >= 0xc0 => {}
            _ => return Err(TxError::InvalidTransaction),
        }

        let item = rlp::decode_exact(raw)?;
        let fields = item.as_list().ok_or(TxError::InvalidTransaction)?;
        if fields.len() != 6 && fields.len() != 9 {
            return Err(TxError::InvalidTransaction);
        }

        let field = |i: usize| -> Result<Buffer, TxError> {
            fields[i]
                .as_bytes()
                .cloned()
                .ok_or(TxError::InvalidTransaction)
        };

        let to = field(3)?;
        if !to.is_empty() && to.len() != ADDRESS_LEN {
            return Err(TxError::InvalidTransaction);
        }

        let mut tx = Self {
            nonce: field(0)?,
            gas_price: field(1)?,
            gas_limit: field(2)?,
            to,
            value: field(4)?,
            data: field(5)?,
            v: None,
            r: None,
            s: None,
            chain_id: None,
            chain_id_mul: None,
        };

        if fields.len() == 9 {
            let v = field(6)?;
            let r = field(7)?;
            let s = field(8)?;

            if is_zero(&r) && is_zero(&s) {
                // EIP-155 unsigned: field 6 is the chain id
                let chain = v.to_int()?;
                if chain == 0 {
                    return Err(TxError::InvalidTransaction);
                }
                tx.chain_id_mul = Some(chain.checked_mul(2).ok_or(TxError::IntegerOverflow)?);
                tx.chain_id = Some(v);
            } else {
                if r.len() > SCALAR_LEN || s.len() > SCALAR_LEN {
                    return Err(TxError::InvalidSignature);
                }
                let (chain, _) = split_v(v.to_int()?)?;
                tx.chain_id = Some(Buffer::from_int(chain));
                tx.chain_id_mul = Some(chain * 2);
                tx.v = Some(v);
                tx.r = Some(r);
                tx.s = Some(s);
            }
        }

        Ok(tx)
    }
}

fn hash_array(hash: &Buffer) -> Result<[u8; HASH_LEN], TxError> {
    if hash.len() != HASH_LEN {
        return Err(TxError::InvalidInput);
    }
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(hash.as_bytes());
    Ok(out)
}

/// Left-pads a signature scalar to 32 bytes.
fn left_pad(scalar: &Buffer) -> Result<[u8; SCALAR_LEN], TxError> {
    if scalar.len() > SCALAR_LEN {
        return Err(TxError::InvalidSignature);
    }
    let mut out = [0u8; SCALAR_LEN];
    out[SCALAR_LEN - scalar.len()..].copy_from_slice(scalar.as_bytes());
    Ok(out)
}

fn is_zero(field: &Buffer) -> bool {
    field.as_bytes().iter().all(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethtx_common::{Hash256, UncompressedPublicKey};
    use hex_literal::hex;

    const TEST_KEY: [u8; 32] =
        hex!("4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318");

    fn key() -> Buffer {
        Buffer::from(TEST_KEY)
    }

    /// Signer whose primitive always fails.
    struct BrokenSigner;

    impl EcdsaSigner for BrokenSigner {
        fn sign(
            &self,
            _hash: &Hash256,
            _private_key: &[u8; PRIVATE_KEY_LEN],
        ) -> Result<RecoverableSignature, TxError> {
            Err(TxError::SigningFailure)
        }

        fn recover(
            &self,
            _signature: &RecoverableSignature,
            _hash: &Hash256,
        ) -> Result<UncompressedPublicKey, TxError> {
            Err(TxError::RecoveryFailure)
        }
    }

    #[test]
    fn test_defaults() {
        let tx = Transaction::default();
        assert_eq!(tx.nonce, Buffer::from_int(1));
        assert_eq!(tx.gas_price.to_int(), Ok(10_000_000_000_000));
        assert_eq!(tx.gas_limit.to_int(), Ok(196_608));
        assert!(tx.to.is_empty());
        assert!(tx.value.is_empty());
        assert!(tx.data.is_empty());
        assert!(!tx.is_signed());
        assert!(tx.chain_id().is_none());
    }

    #[test]
    fn test_input_order() {
        let tx = Transaction::default();
        let names: Vec<&str> = tx.input().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["nonce", "gasPrice", "gasLimit", "to", "value", "data"]
        );
    }

    #[test]
    fn test_hash_default_transaction() {
        let tx = Transaction::default();
        assert_eq!(
            tx.hash(&Buffer::from_int(0)).unwrap().as_bytes(),
            hex!("0ce615a0faa063f60dda0dae26f6b06fa7e11b1e2f3254671e41f902b140908e")
        );
        assert_eq!(
            tx.hash(&Buffer::from_int(1)).unwrap().as_bytes(),
            hex!("80bc9ed21bdebd07b00005569728fd1c5916577a1c141c8fab5d0666ceedf6ab")
        );
    }

    #[test]
    fn test_hash_keeps_chain_id_bytes() {
        let tx = Transaction::default();
        let padded = Buffer::from_hex("0x0001").unwrap();
        assert_eq!(
            tx.hash(&padded).unwrap().as_bytes(),
            hex!("b1edd5957f64fe66d992e5a4ca5e02a7519d65b5beec60ff41325267841a383c")
        );
        assert_ne!(
            tx.hash(&padded).unwrap(),
            tx.hash(&Buffer::from_int(1)).unwrap()
        );
    }

    #[test]
    fn test_new_is_unsigned() {
        let tx = Transaction::new(
            Buffer::from_int(9),
            Buffer::from_int(20_000_000_000),
            Buffer::from_int(21_000),
            Buffer::from([0x35u8; 20]),
            Buffer::from_int(1),
            Buffer::new(),
        );
        assert_eq!(tx.nonce, Buffer::from_int(9));
        assert_eq!(tx.to.len(), 20);
        assert!(!tx.is_signed());
        assert!(tx.chain_id().is_none());
    }

    #[test]
    fn test_hash_is_deterministic() {
        let tx = Transaction {
            data: Buffer::from_hex("0xdeadbeef").unwrap(),
            ..Transaction::default()
        };
        let chain = Buffer::from_int(5);
        assert_eq!(tx.hash(&chain).unwrap(), tx.hash(&chain).unwrap());
        assert_ne!(tx.hash(&chain).unwrap(), tx.hash(&Buffer::new()).unwrap());
    }

    #[test]
    fn test_signature_rejects_bad_lengths() {
        let hash = Buffer::from(keccak256(b"hello"));
        let short_key = Buffer::from(&TEST_KEY[..31]);
        assert_eq!(
            Transaction::signature(&hash, &short_key),
            Err(TxError::InvalidKey)
        );
        assert_eq!(
            Transaction::signature(&Buffer::from(&[0u8; 31][..]), &key()),
            Err(TxError::InvalidInput)
        );
    }

    #[test]
    fn test_signature_and_recover() {
        let hash = Buffer::from(keccak256(b"hello"));
        let sig = Transaction::signature(&hash, &key()).unwrap();
        assert_eq!(sig.len(), 65);
        assert!(sig.as_bytes()[64] <= 1);

        let pubkey = Transaction::recover_public_key(&hash, &sig).unwrap();
        assert_eq!(pubkey, Buffer::from(Secp256k1.public_key(&TEST_KEY).unwrap()));
        assert_eq!(
            Transaction::public_key_to_address(&pubkey).unwrap().as_bytes(),
            hex!("2c7536e3605d9c16a7a3d7b1898e529396a65c23")
        );
    }

    #[test]
    fn test_public_key_to_address_length() {
        assert_eq!(
            Transaction::public_key_to_address(&Buffer::from(&[4u8; 64][..])),
            Err(TxError::InvalidInput)
        );
    }

    #[test]
    fn test_sign_v_values() {
        let mut tx = Transaction::default();
        tx.sign(&key(), &Buffer::from_int(1)).unwrap();
        let v = tx.v().unwrap().to_int().unwrap();
        assert!(v == 37 || v == 38);
        assert_eq!(tx.chain_id_mul(), Some(2));

        tx.sign(&key(), &Buffer::from_int(0)).unwrap();
        let v = tx.v().unwrap().to_int().unwrap();
        assert!(v == 27 || v == 28);
        assert_eq!(tx.chain_id(), Some(&Buffer::from_int(0)));
    }

    #[test]
    fn test_sign_keeps_raw_scalars() {
        let mut tx = Transaction::default();
        tx.sign(&key(), &Buffer::from_int(1)).unwrap();
        assert_eq!(tx.r().unwrap().len(), 32);
        assert_eq!(tx.s().unwrap().len(), 32);
    }

    #[test]
    fn test_with_signature_before_sign() {
        assert_eq!(
            Transaction::default().with_signature(),
            Err(TxError::NotSigned)
        );
        assert_eq!(Transaction::default().sender(), Err(TxError::NotSigned));
        assert_eq!(Transaction::default().tx_hash(), Err(TxError::NotSigned));
    }

    #[test]
    fn test_failed_sign_leaves_state() {
        let mut tx = Transaction::default();
        let raw = tx.sign(&key(), &Buffer::from_int(1)).unwrap();

        let bad_key = Buffer::from(&TEST_KEY[..16]);
        assert_eq!(
            tx.sign(&bad_key, &Buffer::from_int(3)),
            Err(TxError::InvalidKey)
        );
        assert_eq!(
            tx.sign_with(&BrokenSigner, &key(), &Buffer::from_int(3)),
            Err(TxError::SigningFailure)
        );
        assert_eq!(tx.with_signature().unwrap(), raw);
        assert_eq!(tx.chain_id(), Some(&Buffer::from_int(1)));
    }

    #[test]
    fn test_broken_signer_recover() {
        let hash = Buffer::from(keccak256(b"hello"));
        let sig = Transaction::signature(&hash, &key()).unwrap();
        assert_eq!(
            Transaction::recover_public_key_with(&BrokenSigner, &hash, &sig),
            Err(TxError::RecoveryFailure)
        );
    }

    #[test]
    fn test_recover_rejects_bad_signature_buffer() {
        let hash = Buffer::from(keccak256(b"hello"));
        let mut sig = Transaction::signature(&hash, &key())
            .unwrap()
            .into_bytes();
        sig[64] = 2;
        assert_eq!(
            Transaction::recover_public_key(&hash, &Buffer::from(sig)),
            Err(TxError::InvalidSignature)
        );
    }

    #[test]
    fn test_sign_chain_id_overflow() {
        let mut tx = Transaction::default();
        assert_eq!(
            tx.sign(&key(), &Buffer::from_int(u128::MAX)),
            Err(TxError::IntegerOverflow)
        );
        assert!(!tx.is_signed());
    }

    #[test]
    fn test_sender_and_recovery_id() {
        let mut tx = Transaction {
            nonce: Buffer::from_int(7),
            to: Buffer::from_hex("0x3535353535353535353535353535353535353535").unwrap(),
            value: Buffer::from_int(1_000),
            ..Transaction::default()
        };
        for chain in [0u128, 1, 56, 11_155_111] {
            tx.sign(&key(), &Buffer::from_int(chain)).unwrap();
            assert!(tx.recovery_id().unwrap() <= 1);
            assert_eq!(
                tx.sender().unwrap().as_bytes(),
                hex!("2c7536e3605d9c16a7a3d7b1898e529396a65c23")
            );
        }
    }

    #[test]
    fn test_decode_signed_round_trip() {
        let mut tx = Transaction {
            nonce: Buffer::from_int(0x2e),
            data: Buffer::from_hex("0x095ea7b3").unwrap(),
            ..Transaction::default()
        };
        let raw = tx.sign(&key(), &Buffer::from_int(1)).unwrap();

        let decoded = Transaction::decode(raw.as_bytes()).unwrap();
        assert!(decoded.is_signed());
        assert_eq!(decoded, tx);
        assert_eq!(decoded.with_signature().unwrap(), raw);
        assert_eq!(decoded.tx_hash().unwrap(), tx.tx_hash().unwrap());
    }

    #[test]
    fn test_decode_unsigned() {
        let tx = Transaction::default();

        // Six fields
        let raw = hex!("cf018609184e72a00083030000808080");
        let decoded = Transaction::decode(&raw).unwrap();
        assert!(!decoded.is_signed());
        assert!(decoded.chain_id().is_none());
        assert_eq!(decoded.input(), tx.input());

        // EIP-155 placeholders
        let raw = hex!("d2018609184e72a00083030000808080018080");
        let decoded = Transaction::decode(&raw).unwrap();
        assert!(!decoded.is_signed());
        assert_eq!(decoded.chain_id(), Some(&Buffer::from_int(1)));
        assert_eq!(
            decoded.hash(decoded.chain_id().unwrap()).unwrap(),
            tx.hash(&Buffer::from_int(1)).unwrap()
        );
    }

    #[test]
    fn test_decode_rejects() {
        // Empty
        assert_eq!(Transaction::decode(&[]), Err(TxError::InvalidTransaction));
        // EIP-1559 envelope
        assert_eq!(
            Transaction::decode(&hex!("02c0")),
            Err(TxError::InvalidTransaction)
        );
        // A string, not a list
        assert_eq!(
            Transaction::decode(&hex!("83010203")),
            Err(TxError::InvalidTransaction)
        );
        // Wrong field count
        assert_eq!(
            Transaction::decode(&hex!("c3010203")),
            Err(TxError::InvalidTransaction)
        );
        // Truncated
        assert_eq!(
            Transaction::decode(&hex!("cf018609184e72a000830300008080")),
            Err(TxError::InvalidRlp)
        );
        // Recipient of the wrong size
        assert_eq!(
            Transaction::decode(&hex!("d0018609184e72a0008303000081ff8080")),
            Err(TxError::InvalidTransaction)
        );
        // v = 30 with a non-zero signature
        assert_eq!(
            Transaction::decode(&hex!("d2018609184e72a000830300008080801e0101")),
            Err(TxError::InvalidTransaction)
        );
        // Oversized
        let big = vec![0xf8; MAX_TX_SIZE + 1];
        assert_eq!(
            Transaction::decode(&big),
            Err(TxError::InvalidTransaction)
        );
    }
}
