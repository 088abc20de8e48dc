//! # Shared Crypto - Personal-Sign Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256, SHA-256 | Address derivation, EIP-191 digests, audit hashes |
//! | `ecdsa` | secp256k1 | Personal-sign signatures, 65-byte `r \|\| s \|\| v` codec |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S normalization (EIP-2)
//! - **EIP-191**: every signed payload is prefixed with
//!   `"\x19Ethereum Signed Message:\n" + len`, so a personal signature can
//!   never be replayed as a transaction signature

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{address_from_verifying_key, PersonalSignature, Secp256k1KeyPair};
pub use errors::CryptoError;
pub use hashing::{keccak256, personal_message_hash, Hash};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
