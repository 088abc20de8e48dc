//! # Hashing
//!
//! Keccak-256 for account addresses and personal-message digests.

use sha3::{Digest, Keccak256};

/// 256-bit digest.
pub type Hash = [u8; 32];

/// EIP-191 version 0x45 prefix for personal messages.
const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Keccak-256 (the pre-standard SHA-3 variant used for Ethereum accounts).
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Digest a wallet signs for `personal_sign`:
/// `keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)`
/// where `len` is the decimal byte length.
pub fn personal_message_hash(message: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_PREFIX);
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}
