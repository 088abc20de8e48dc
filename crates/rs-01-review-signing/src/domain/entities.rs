//! # Domain Entities
//!
//! Results of the signing step and of a full review submission.

use crate::ports::outbound::WalletError;
use shared_types::{Review, ReviewError, SignedReview};
use std::fmt;

/// Why a review went out without a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The draft could not form a canonical message.
    InvalidDraft(ReviewError),
    /// The wallet refused or failed to sign.
    Wallet(WalletError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidDraft(e) => write!(f, "{e}"),
            SkipReason::Wallet(e) => write!(f, "{e}"),
        }
    }
}

/// Non-blocking notice shown when signing was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningNotice {
    pub reason: SkipReason,
}

impl SigningNotice {
    /// Headline shown to the user.
    pub const TITLE: &'static str = "Signature skipped";

    pub fn new(reason: SkipReason) -> Self {
        Self { reason }
    }

    /// Human-readable detail line.
    pub fn detail(&self) -> String {
        format!("Submitting unsigned review: {}", self.reason)
    }
}

impl fmt::Display for SigningNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::TITLE, self.reason)
    }
}

/// Result of a single signing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningOutcome {
    pub signed: SignedReview,
    pub notice: Option<SigningNotice>,
}

impl SigningOutcome {
    /// Unsigned without a notice: no wallet was ever involved.
    pub fn unsigned() -> Self {
        Self {
            signed: SignedReview::Unsigned,
            notice: None,
        }
    }

    /// Unsigned because the attempt failed.
    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            signed: SignedReview::Unsigned,
            notice: Some(SigningNotice::new(reason)),
        }
    }

    pub fn signed(signed: SignedReview) -> Self {
        Self {
            signed,
            notice: None,
        }
    }
}

/// A stored review plus whatever the signing step reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedReview {
    pub review: Review,
    pub notice: Option<SigningNotice>,
}
