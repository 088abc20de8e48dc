//! # Verification Errors
//!
//! Three layers: [`VerificationError`] ends up inside a `valid: false`
//! outcome, [`ServiceError`] means the request itself could not be
//! processed, and [`ClientError`] is what a caller of the endpoint sees.

use shared_types::{AddressError, ReviewError};
use thiserror::Error;

/// Why a signature did not verify.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// The signature is not valid hex.
    #[error("Recover failed: signature is not valid hex")]
    InvalidHex,

    /// The signature does not decode to 65 bytes.
    #[error("Recover failed: signature must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// R or S is outside [1, n-1], or R is not an x-coordinate on the curve.
    #[error("Recover failed: invalid signature format")]
    InvalidFormat,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Recover failed: invalid recovery ID {0}")]
    InvalidRecoveryId(u8),

    /// Public key recovery failed for every message variant.
    #[error("Recover failed: could not recover public key")]
    RecoveryFailed,

    /// The claimed wallet address is not a 20-byte hex address.
    #[error("Invalid wallet_address: {0}")]
    InvalidClaimedAddress(AddressError),
}

/// The request could not be verified at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Missing fields or invalid review fields.
    #[error("{0}")]
    MalformedInput(String),

    /// Unexpected failure inside the verifier.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ServiceError::MalformedInput(_))
    }
}

impl From<ReviewError> for ServiceError {
    fn from(e: ReviewError) -> Self {
        match e {
            ReviewError::Serialization(detail) => ServiceError::Internal(detail),
            other => ServiceError::MalformedInput(other.to_string()),
        }
    }
}

/// Failure of a call through a [`VerificationClient`](crate::VerificationClient).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The verifier could not be reached.
    #[error("Verification transport error: {0}")]
    Transport(String),

    /// The verifier answered with a non-success status.
    #[error("Verifier returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not a verification response.
    #[error("Invalid verification response: {0}")]
    Decode(String),
}
