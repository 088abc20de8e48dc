//! # ECDSA Personal Signatures (secp256k1)
//!
//! Wallet-compatible signatures over EIP-191 personal messages.
//!
//! ## Wire Format
//!
//! `0x`-prefixed hex of 65 bytes: `r (32) || s (32) || v (1)` with
//! `v ∈ {27, 28}` as wallets emit it (`{0, 1}` is also accepted on decode).
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization (EIP-2)

use crate::hashing::{keccak256, personal_message_hash};
use crate::CryptoError;
use k256::ecdsa::{RecoveryId, SigningKey, VerifyingKey};
use zeroize::Zeroize;

/// Byte length of an encoded personal signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Recoverable signature in `r || s || v` layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonalSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery byte as transmitted (0, 1, 27 or 28 for well-formed input)
    pub v: u8,
}

impl PersonalSignature {
    /// Decode from hex text, with or without a `0x` prefix.
    ///
    /// Only the layout is checked here; scalar ranges and the recovery byte
    /// are validated at recovery time.
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        let text = text.trim();
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let bytes = hex::decode(digits).map_err(|_| CryptoError::InvalidHex)?;
        Self::from_slice(&bytes)
    }

    /// Decode from 65 raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(CryptoError::InvalidSignatureLength {
                expected: SIGNATURE_LENGTH,
                actual: bytes.len(),
            });
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        Ok(Self { r, s, v: bytes[64] })
    }

    /// Encode as 65 raw bytes.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Encode as `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

/// Derive the 20-byte account address of a public key:
/// the last 20 bytes of `keccak256(x || y)`.
pub fn address_from_verifying_key(key: &VerifyingKey) -> [u8; 20] {
    let encoded = key.to_encoded_point(false);
    // Skip the 0x04 uncompressed-point tag
    let hash = keccak256(&encoded.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// secp256k1 keypair able to produce personal signatures.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_slice(&bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Public verifying key.
    pub fn verifying_key(&self) -> VerifyingKey {
        *self.signing_key.verifying_key()
    }

    /// Account address of this keypair.
    pub fn address(&self) -> [u8; 20] {
        address_from_verifying_key(self.signing_key.verifying_key())
    }

    /// Sign `message` the way a wallet's `personal_sign` does.
    pub fn sign_personal(&self, message: &[u8]) -> Result<PersonalSignature, CryptoError> {
        let digest = personal_message_hash(message);
        self.sign_prehash(&digest)
    }

    /// Sign a 32-byte digest directly, producing a low-S recoverable signature.
    pub fn sign_prehash(&self, digest: &[u8; 32]) -> Result<PersonalSignature, CryptoError> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        // Flip the y-parity when normalizing S so recovery still finds the key
        let (signature, recovery_id) = match signature.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (signature, recovery_id),
        };

        let bytes = signature.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(PersonalSignature {
            r,
            s,
            v: recovery_id.to_byte() + 27,
        })
    }

    /// Get secret key bytes (for serialization).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }
}

impl Drop for Secp256k1KeyPair {
    fn drop(&mut self) {
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}
