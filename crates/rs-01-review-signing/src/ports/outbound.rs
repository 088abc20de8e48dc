//! # Outbound Ports (Driven Ports / SPI)
//!
//! The wallet capability and the review store this subsystem depends on.

use async_trait::async_trait;
use shared_types::{NewReview, Review, WalletAddress};
use thiserror::Error;

/// Errors reported by a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The user declined the prompt.
    #[error("User rejected the request")]
    UserRejected,

    /// The wallet is installed but not answering.
    #[error("Wallet unavailable")]
    Unavailable,

    /// The wallet returned no accounts.
    #[error("Wallet returned no accounts")]
    NoAccounts,

    /// The wallet does not control the requested account.
    #[error("Account is not managed by this wallet")]
    UnknownAccount,

    /// Communication with the wallet failed.
    #[error("Wallet transport error: {0}")]
    Transport(String),
}

/// A wallet able to personal-sign messages.
///
/// Injected into the signer; there is no ambient global wallet.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Ask the wallet for its accounts, prompting the user if needed.
    async fn request_accounts(&self) -> Result<Vec<WalletAddress>, WalletError>;

    /// Personal-sign `message` with `account`.
    ///
    /// Returns the `0x`-prefixed hex of the 65-byte `r || s || v` signature.
    async fn sign_message(
        &self,
        message: &[u8],
        account: &WalletAddress,
    ) -> Result<String, WalletError>;
}

/// Errors from the review store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Review store unavailable: {0}")]
    Unavailable(String),

    #[error("Review rejected by store: {0}")]
    Rejected(String),
}

/// Persistence for reviews. Rows are immutable after insert.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Insert a review, assigning its id and creation time.
    async fn insert(&self, review: NewReview) -> Result<Review, StoreError>;

    /// Fetch a review by id.
    async fn get(&self, id: &str) -> Result<Option<Review>, StoreError>;

    /// Reviews for one hotel, newest first.
    async fn list_by_hotel(&self, hotel_id: &str) -> Result<Vec<Review>, StoreError>;
}
