//! # Shared Types Crate
//!
//! Review entities shared by every RealStay review-signature crate.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the canonical review message is defined once
//!   and serialized by one function, so signer and verifier cannot drift.
//! - **All-or-Nothing Signatures**: [`SignedReview`] is a tagged variant; a
//!   review is either fully signed or fully unsigned.
//! - **Case-Insensitive Accounts**: [`WalletAddress`] compares by bytes, never
//!   by the textual casing a wallet happened to return.

pub mod address;
pub mod canonical;
pub mod entities;
pub mod errors;
pub mod signed;

pub use address::WalletAddress;
pub use canonical::{ReviewMessage, REVIEW_MESSAGE_TYPE};
pub use entities::{NewReview, Review, ReviewDraft, SignatureClaim};
pub use errors::{AddressError, ReviewError};
pub use signed::SignedReview;
