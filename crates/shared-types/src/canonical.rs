//! # Canonical Review Message
//!
//! The exact payload a review signature attests to.
//!
//! ## Byte-Level Invariant
//!
//! The serialized form must be identical when the review is signed and when it
//! is verified. Serialization is compact JSON with keys in declaration order:
//!
//! ```text
//! {"type":"realstay.review.v1","user_id":..,"hotel_id":..,"rating":N,"comment":..}
//! ```
//!
//! `serde_json` escapes only quotes, backslashes and control characters and
//! writes non-ASCII text verbatim, which is the same output a browser's
//! `JSON.stringify` produces for this shape.

use crate::errors::ReviewError;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Format version tag carried in every canonical message.
pub const REVIEW_MESSAGE_TYPE: &str = "realstay.review.v1";

/// Canonical signable review payload.
///
/// Field order is part of the wire format. Do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewMessage {
    #[serde(rename = "type")]
    kind: &'static str,
    user_id: String,
    hotel_id: String,
    rating: u8,
    comment: String,
}

impl ReviewMessage {
    /// Build a canonical message from review fields.
    ///
    /// # Errors
    /// * `ReviewError::RatingOutOfRange` - rating not in 1..=5
    /// * `ReviewError::EmptyComment` - comment is blank
    pub fn new(
        user_id: impl Into<String>,
        hotel_id: impl Into<String>,
        rating: i64,
        comment: impl Into<String>,
    ) -> Result<Self, ReviewError> {
        if !(1..=5).contains(&rating) {
            return Err(ReviewError::RatingOutOfRange(rating));
        }

        let comment = comment.into();
        if comment.trim().is_empty() {
            return Err(ReviewError::EmptyComment);
        }

        Ok(Self {
            kind: REVIEW_MESSAGE_TYPE,
            user_id: user_id.into(),
            hotel_id: hotel_id.into(),
            rating: rating as u8,
            comment,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn hotel_id(&self) -> &str {
        &self.hotel_id
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Serialize to the canonical byte form.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>, ReviewError> {
        serde_json::to_vec(self).map_err(|e| ReviewError::Serialization(e.to_string()))
    }

    /// Canonical form as a string (what a wallet displays to the user).
    pub fn to_canonical_string(&self) -> Result<String, ReviewError> {
        serde_json::to_string(self).map_err(|e| ReviewError::Serialization(e.to_string()))
    }

    /// Lowercase hex SHA-256 of the canonical bytes.
    ///
    /// Stored next to the signature as an audit artifact; verification never
    /// consults it.
    pub fn digest_hex(&self) -> Result<String, ReviewError> {
        let bytes = self.to_canonical_bytes()?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }
}
