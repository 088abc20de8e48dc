//! # Local Key Wallet
//!
//! A [`WalletSigner`] backed by an in-process secp256k1 key. Behaves like a
//! browser wallet's `personal_sign`, and can be switched into the failure
//! modes real wallets show.

use crate::ports::outbound::{WalletError, WalletSigner};
use async_trait::async_trait;
use parking_lot::Mutex;
use shared_crypto::Secp256k1KeyPair;
use shared_types::WalletAddress;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// How the wallet answers the next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletBehavior {
    /// Sign exactly the bytes it was given.
    #[default]
    Sign,
    /// The user declines every prompt.
    Reject,
    /// The wallet does not respond.
    Unavailable,
    /// Sign the bytes with a trailing `\n` appended, as some wallets do.
    AppendNewline,
}

pub struct LocalKeyWallet {
    keypair: Secp256k1KeyPair,
    address: WalletAddress,
    behavior: Mutex<WalletBehavior>,
    latency: Option<Duration>,
    sign_requests: AtomicUsize,
}

impl LocalKeyWallet {
    pub fn new(keypair: Secp256k1KeyPair) -> Self {
        let address = WalletAddress::from_bytes(keypair.address());
        Self {
            keypair,
            address,
            behavior: Mutex::new(WalletBehavior::default()),
            latency: None,
            sign_requests: AtomicUsize::new(0),
        }
    }

    /// Wallet with a freshly generated key.
    pub fn random() -> Self {
        Self::new(Secp256k1KeyPair::generate())
    }

    pub fn with_behavior(self, behavior: WalletBehavior) -> Self {
        *self.behavior.lock() = behavior;
        self
    }

    /// Delay every signing request, like a user reading the prompt.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn set_behavior(&self, behavior: WalletBehavior) {
        *self.behavior.lock() = behavior;
    }

    pub fn address(&self) -> WalletAddress {
        self.address
    }

    /// Number of signing prompts received so far.
    pub fn sign_requests(&self) -> usize {
        self.sign_requests.load(Ordering::Relaxed)
    }

    fn behavior(&self) -> WalletBehavior {
        *self.behavior.lock()
    }
}

#[async_trait]
impl WalletSigner for LocalKeyWallet {
    async fn request_accounts(&self) -> Result<Vec<WalletAddress>, WalletError> {
        match self.behavior() {
            WalletBehavior::Reject => Err(WalletError::UserRejected),
            WalletBehavior::Unavailable => Err(WalletError::Unavailable),
            WalletBehavior::Sign | WalletBehavior::AppendNewline => Ok(vec![self.address]),
        }
    }

    async fn sign_message(
        &self,
        message: &[u8],
        account: &WalletAddress,
    ) -> Result<String, WalletError> {
        self.sign_requests.fetch_add(1, Ordering::Relaxed);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if *account != self.address {
            return Err(WalletError::UnknownAccount);
        }

        let signature = match self.behavior() {
            WalletBehavior::Reject => return Err(WalletError::UserRejected),
            WalletBehavior::Unavailable => return Err(WalletError::Unavailable),
            WalletBehavior::Sign => self.keypair.sign_personal(message),
            WalletBehavior::AppendNewline => {
                let mut padded = Vec::with_capacity(message.len() + 1);
                padded.extend_from_slice(message);
                padded.push(b'\n');
                self.keypair.sign_personal(&padded)
            }
        };

        signature
            .map(|sig| sig.to_hex())
            .map_err(|e| WalletError::Transport(e.to_string()))
    }
}
