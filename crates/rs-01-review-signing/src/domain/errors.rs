//! # Signing Errors

use crate::ports::outbound::{StoreError, WalletError};
use thiserror::Error;

/// Errors from the signer itself. Signing failures are not errors; they
/// surface as a [`SigningNotice`](crate::SigningNotice).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    /// No wallet capability is installed.
    #[error("No wallet available")]
    WalletAbsent,

    /// Another sign/submit sequence is still running on this signer.
    #[error("A signing request is already in progress")]
    SigningInProgress,

    /// The wallet failed while connecting.
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),
}

/// Errors that stop a review from being stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The comment field is empty.
    #[error("Please write a comment")]
    MissingComment,

    /// A submission is already in flight.
    #[error("A review submission is already in progress")]
    InProgress,

    /// The review store rejected the insert.
    #[error("Failed to store review: {0}")]
    Store(#[from] StoreError),
}
