//! # Review Signing Subsystem (RS-01)
//!
//! Attaches an optional wallet signature to a review before it is stored.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): signing outcomes and errors, no I/O
//! - **Ports Layer** (`ports/`): the wallet capability and the review store
//! - **Service Layer** (`service.rs`, `submission.rs`): wallet connection,
//!   the single-attempt signing step and the submit flow
//! - **Adapters** (`adapters/`): an in-process key wallet and an in-memory store
//!
//! ## Failure Model
//!
//! Signing never blocks a review. A missing wallet, a rejected prompt or a
//! transport failure all degrade to an unsigned review plus a
//! "Signature skipped" notice.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod submission;

pub use adapters::local_wallet::{LocalKeyWallet, WalletBehavior};
pub use adapters::memory_store::InMemoryReviewStore;
pub use domain::entities::{SigningNotice, SigningOutcome, SkipReason, SubmittedReview};
pub use domain::errors::{SignerError, SubmitError};
pub use ports::inbound::ReviewSigningApi;
pub use ports::outbound::{ReviewStore, StoreError, WalletError, WalletSigner};
pub use service::{ReviewSigner, SigningGuard};
pub use submission::ReviewSubmission;
