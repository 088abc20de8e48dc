//! # Review Signature Verification Subsystem (RS-02)
//!
//! Decides whether a stored review was signed by the wallet it claims.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): signature decoding, address recovery, the
//!   trailing-newline policy, wire types and display states. No I/O.
//! - **Ports Layer** (`ports/`): the verification API and the client port a
//!   review page uses to reach a verifier
//! - **Service Layer** (`service.rs`, `board.rs`): request verification,
//!   batch verification and per-review display tracking
//!
//! ## Security Notes
//!
//! - **Re-derivation**: the signed message is always rebuilt from the stored
//!   review fields; a caller-supplied message string is never trusted
//! - **Malleability Prevention (EIP-2)**: signatures with high S are rejected
//! - **Case-Insensitive Comparison**: addresses are compared as bytes

pub mod adapters;
pub mod board;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::local_client::LocalVerificationClient;
pub use board::VerificationBoard;
pub use domain::display::ReviewDisplayState;
pub use domain::entities::{
    BatchVerificationResult, MessageVariant, ReviewVerdict, VerificationOutcome,
    VerificationRequest,
};
pub use domain::errors::{ClientError, ServiceError, VerificationError};
pub use domain::policy::verify_claim;
pub use domain::recovery::{decode_signature, recover_address};
pub use domain::wire::{VerificationResponse, VerifyRequestBody, WireMessage, MISSING_FIELDS};
pub use ports::inbound::ReviewVerificationApi;
pub use ports::outbound::VerificationClient;
pub use service::ReviewVerificationService;
