//! # Error Types
//!
//! Errors raised while building review entities.

use thiserror::Error;

/// Errors raised when review fields cannot form a canonical message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// Rating must be an integer in 1..=5.
    #[error("Rating out of range: {0} (expected 1-5)")]
    RatingOutOfRange(i64),

    /// Comment is empty or whitespace only.
    #[error("Comment must not be empty")]
    EmptyComment,

    /// Canonical serialization failed.
    #[error("Canonical serialization failed: {0}")]
    Serialization(String),
}

/// Errors raised when parsing a wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Missing `0x` prefix.
    #[error("Wallet address must start with 0x")]
    MissingPrefix,

    /// Wrong number of hex digits.
    #[error("Wallet address must have 40 hex digits, got {0}")]
    InvalidLength(usize),

    /// Non-hex characters.
    #[error("Wallet address is not valid hex")]
    InvalidHex,
}
