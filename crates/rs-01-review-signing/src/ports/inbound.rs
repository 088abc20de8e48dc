//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::SigningOutcome;
use crate::domain::errors::SignerError;
use async_trait::async_trait;
use shared_types::{ReviewDraft, WalletAddress};

/// Review signing API.
#[async_trait]
pub trait ReviewSigningApi: Send + Sync {
    /// Connect the wallet and remember its first account.
    async fn connect_wallet(&self) -> Result<WalletAddress, SignerError>;

    /// The account signatures will be requested for, if connected.
    fn connected_account(&self) -> Option<WalletAddress>;

    /// Try once to sign `draft`.
    ///
    /// # Errors
    /// Only [`SignerError::SigningInProgress`]; wallet failures degrade to an
    /// unsigned outcome with a notice.
    async fn attempt_sign(&self, draft: &ReviewDraft) -> Result<SigningOutcome, SignerError>;
}
