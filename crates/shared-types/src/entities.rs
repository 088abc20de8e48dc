//! # Review Entities
//!
//! Review records as the review store persists them, plus the draft the
//! submit form collects.

use crate::canonical::ReviewMessage;
use crate::errors::ReviewError;
use crate::signed::SignedReview;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields a user fills in before submitting a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub user_id: String,
    pub hotel_id: String,
    pub rating: i64,
    pub comment: String,
}

impl ReviewDraft {
    pub fn new(
        user_id: impl Into<String>,
        hotel_id: impl Into<String>,
        rating: i64,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            hotel_id: hotel_id.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Derive the canonical message for this draft.
    pub fn canonical_message(&self) -> Result<ReviewMessage, ReviewError> {
        ReviewMessage::new(
            self.user_id.clone(),
            self.hotel_id.clone(),
            self.rating,
            self.comment.clone(),
        )
    }
}

/// Insert payload handed to the review store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub draft: ReviewDraft,
    pub signed: SignedReview,
}

/// A persisted review row.
///
/// The signature columns are nullable and written once at insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub hotel_id: String,
    pub rating: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub wallet_address: Option<String>,
    pub signature: Option<String>,
    pub message_hash: Option<String>,
}

/// The signature/address pair a verifier needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureClaim<'a> {
    pub wallet_address: &'a str,
    pub signature: &'a str,
}

impl Review {
    /// Signature and claimed address, if both are present and non-empty.
    ///
    /// A row with only one of the two is displayed as unsigned.
    pub fn signature_claim(&self) -> Option<SignatureClaim<'_>> {
        let wallet_address = self.wallet_address.as_deref().filter(|s| !s.is_empty())?;
        let signature = self.signature.as_deref().filter(|s| !s.is_empty())?;
        Some(SignatureClaim {
            wallet_address,
            signature,
        })
    }

    /// The stored attestation as a tagged value.
    pub fn signed_review(&self) -> SignedReview {
        SignedReview::from_columns(
            self.wallet_address.as_deref(),
            self.signature.as_deref(),
            self.message_hash.as_deref(),
        )
    }

    /// Rebuild the canonical message from this row's own fields.
    pub fn canonical_message(&self) -> Result<ReviewMessage, ReviewError> {
        ReviewMessage::new(
            self.user_id.clone(),
            self.hotel_id.clone(),
            self.rating,
            self.comment.clone(),
        )
    }
}
