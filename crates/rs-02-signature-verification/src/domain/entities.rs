//! # Domain Entities
//!
//! Verification requests and their outcomes.

use super::errors::{ServiceError, VerificationError};
use shared_types::{Review, ReviewMessage, WalletAddress};
use std::borrow::Cow;

/// Which serialization of the canonical message the signature matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageVariant {
    /// The canonical bytes exactly.
    Canonical,
    /// The canonical bytes plus `\n`, as some wallets sign.
    TrailingNewline,
}

impl MessageVariant {
    /// Bytes this variant signs for the given canonical serialization.
    pub fn apply<'a>(&self, canonical: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            MessageVariant::Canonical => Cow::Borrowed(canonical),
            MessageVariant::TrailingNewline => {
                let mut padded = Vec::with_capacity(canonical.len() + 1);
                padded.extend_from_slice(canonical);
                padded.push(b'\n');
                Cow::Owned(padded)
            }
        }
    }
}

/// A fully validated request: the canonical message plus the claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRequest {
    /// Message rebuilt from the review's own fields.
    pub message: ReviewMessage,
    /// Hex signature as stored.
    pub signature: String,
    /// Claimed wallet address as stored.
    pub wallet_address: String,
}

impl VerificationRequest {
    /// Build the request for a stored review.
    ///
    /// Returns `Ok(None)` when the review carries no complete signature claim.
    pub fn from_review(review: &Review) -> Result<Option<Self>, ServiceError> {
        let Some(claim) = review.signature_claim() else {
            return Ok(None);
        };

        Ok(Some(Self {
            message: review.canonical_message()?,
            signature: claim.signature.to_string(),
            wallet_address: claim.wallet_address.to_string(),
        }))
    }
}

/// Result of verifying one signature claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Whether the recovered signer equals the claimed wallet
    pub valid: bool,
    /// The recovered address (if recovery succeeded)
    pub recovered_address: Option<WalletAddress>,
    /// Error details (if recovery failed)
    pub error: Option<VerificationError>,
    /// The message variant that matched (if valid)
    pub matched_variant: Option<MessageVariant>,
}

impl VerificationOutcome {
    /// Recovered signer equals the claim.
    pub fn matched(recovered_address: WalletAddress, variant: MessageVariant) -> Self {
        Self {
            valid: true,
            recovered_address: Some(recovered_address),
            error: None,
            matched_variant: Some(variant),
        }
    }

    /// Recovery succeeded but yielded a different account.
    pub fn mismatch(recovered_address: WalletAddress) -> Self {
        Self {
            valid: false,
            recovered_address: Some(recovered_address),
            error: None,
            matched_variant: None,
        }
    }

    /// Recovery could not be performed.
    pub fn rejected(error: VerificationError) -> Self {
        Self {
            valid: false,
            recovered_address: None,
            error: Some(error),
            matched_variant: None,
        }
    }

    /// Whether validity depended on the trailing-newline variant.
    pub fn used_newline_fallback(&self) -> bool {
        self.matched_variant == Some(MessageVariant::TrailingNewline)
    }
}

/// Verification result for a stored review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReviewVerdict {
    /// No complete signature claim; verification not attempted.
    Unsigned,
    /// Claim present and checked.
    Checked(VerificationOutcome),
}

impl ReviewVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, ReviewVerdict::Checked(outcome) if outcome.valid)
    }
}

/// Result of batch verification.
#[derive(Clone, Debug)]
pub struct BatchVerificationResult {
    /// Individual results, in request order
    pub results: Vec<Result<VerificationOutcome, ServiceError>>,
    /// Count of valid signatures
    pub valid_count: usize,
    /// Count of completed verifications that were not valid
    pub invalid_count: usize,
    /// Count of requests that could not be processed
    pub error_count: usize,
}

impl BatchVerificationResult {
    pub fn from_results(results: Vec<Result<VerificationOutcome, ServiceError>>) -> Self {
        let valid_count = results
            .iter()
            .filter(|r| matches!(r, Ok(outcome) if outcome.valid))
            .count();
        let error_count = results.iter().filter(|r| r.is_err()).count();
        let invalid_count = results.len() - valid_count - error_count;

        Self {
            results,
            valid_count,
            invalid_count,
            error_count,
        }
    }

    /// Whether every request verified valid.
    pub fn all_valid(&self) -> bool {
        self.valid_count == self.results.len()
    }
}
