//! # Review Signer Service
//!
//! Connects the injected wallet and signs review drafts with it.
//!
//! ## Flow
//!
//! 1. No wallet or no connected account: unsigned, no prompt, no notice
//! 2. Build and serialize the canonical message, hash it (SHA-256 hex)
//! 3. Ask the wallet to personal-sign the serialized bytes
//! 4. Success: `Signed { account, signature, digest }`
//! 5. Any failure: unsigned plus a "Signature skipped" notice, no retry

use crate::domain::entities::{SigningOutcome, SkipReason};
use crate::domain::errors::SignerError;
use crate::ports::inbound::ReviewSigningApi;
use crate::ports::outbound::{WalletError, WalletSigner};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{ReviewDraft, SignedReview, WalletAddress};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Marks a sign/submit sequence as in flight. Released on drop.
#[must_use = "the in-flight slot is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SigningGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for SigningGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Signs review drafts with an optional wallet capability.
pub struct ReviewSigner<W: WalletSigner> {
    wallet: Option<W>,
    account: RwLock<Option<WalletAddress>>,
    in_flight: AtomicBool,
}

impl<W: WalletSigner> ReviewSigner<W> {
    /// Create a signer backed by `wallet`.
    pub fn new(wallet: W) -> Self {
        Self::with_wallet(Some(wallet))
    }

    /// Create a signer for an environment without a wallet.
    pub fn without_wallet() -> Self {
        Self::with_wallet(None)
    }

    pub fn with_wallet(wallet: Option<W>) -> Self {
        Self {
            wallet,
            account: RwLock::new(None),
            in_flight: AtomicBool::new(false),
        }
    }

    /// The injected wallet, if any.
    pub fn wallet(&self) -> Option<&W> {
        self.wallet.as_ref()
    }

    /// Whether a sign/submit sequence is currently running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the single in-flight slot.
    pub fn try_begin(&self) -> Result<SigningGuard<'_>, SignerError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| SigningGuard {
                flag: &self.in_flight,
            })
            .map_err(|_| SignerError::SigningInProgress)
    }

    /// Sign `draft` while holding the in-flight slot.
    ///
    /// Never fails: every problem becomes an unsigned outcome.
    pub async fn sign_in_flight(
        &self,
        _guard: &SigningGuard<'_>,
        draft: &ReviewDraft,
    ) -> SigningOutcome {
        let (wallet, account) = match (self.wallet.as_ref(), self.connected_account()) {
            (Some(wallet), Some(account)) => (wallet, account),
            _ => {
                debug!("No connected wallet, review will be unsigned");
                return SigningOutcome::unsigned();
            }
        };

        let message = match draft.canonical_message() {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Draft cannot be signed");
                return SigningOutcome::skipped(SkipReason::InvalidDraft(e));
            }
        };

        let prepared = message
            .to_canonical_bytes()
            .and_then(|bytes| message.digest_hex().map(|digest| (bytes, digest)));
        let (bytes, message_hash) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                warn!(error = %e, "Canonical serialization failed");
                return SigningOutcome::skipped(SkipReason::InvalidDraft(e));
            }
        };

        match wallet.sign_message(&bytes, &account).await {
            Ok(signature) => {
                info!(
                    wallet = %account,
                    hotel_id = %draft.hotel_id,
                    "Review signed"
                );
                SigningOutcome::signed(SignedReview::Signed {
                    wallet_address: account,
                    signature,
                    message_hash,
                })
            }
            Err(e) => {
                warn!(wallet = %account, error = %e, "Signature skipped");
                SigningOutcome::skipped(SkipReason::Wallet(e))
            }
        }
    }
}

#[async_trait]
impl<W: WalletSigner> ReviewSigningApi for ReviewSigner<W> {
    async fn connect_wallet(&self) -> Result<WalletAddress, SignerError> {
        let wallet = self.wallet.as_ref().ok_or(SignerError::WalletAbsent)?;

        if let Some(account) = *self.account.read() {
            return Ok(account);
        }

        let accounts = wallet.request_accounts().await?;
        let account = accounts.first().copied().ok_or(WalletError::NoAccounts)?;

        *self.account.write() = Some(account);
        info!(wallet = %account, "Wallet connected");
        Ok(account)
    }

    fn connected_account(&self) -> Option<WalletAddress> {
        *self.account.read()
    }

    async fn attempt_sign(&self, draft: &ReviewDraft) -> Result<SigningOutcome, SignerError> {
        let guard = self.try_begin()?;
        Ok(self.sign_in_flight(&guard, draft).await)
    }
}
