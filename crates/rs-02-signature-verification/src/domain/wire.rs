//! # Wire Types
//!
//! JSON bodies of the verification endpoint.
//!
//! Request: `{ message: {type, user_id, hotel_id, rating, comment}, signature, wallet_address }`
//! Response: `{ valid, recoveredAddress?, error? }`

use super::entities::{VerificationOutcome, VerificationRequest};
use super::errors::ServiceError;
use serde::{Deserialize, Serialize};
use shared_types::{Review, ReviewMessage, REVIEW_MESSAGE_TYPE};

/// Error text for a request without message, signature or wallet address.
pub const MISSING_FIELDS: &str = "Missing fields: message, signature, wallet_address required";

/// Review fields as a client sends them.
///
/// `type` is accepted but ignored; the verifier always uses its own constant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireMessage {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl WireMessage {
    /// Rebuild the canonical message from these fields.
    pub fn to_canonical(&self) -> Result<ReviewMessage, ServiceError> {
        let required = |name: &str| ServiceError::MalformedInput(format!("message.{name} is required"));

        let user_id = self.user_id.clone().ok_or_else(|| required("user_id"))?;
        let hotel_id = self.hotel_id.clone().ok_or_else(|| required("hotel_id"))?;
        let rating = self.rating.ok_or_else(|| required("rating"))?;
        let comment = self.comment.clone().ok_or_else(|| required("comment"))?;

        Ok(ReviewMessage::new(user_id, hotel_id, rating, comment)?)
    }
}

impl From<&ReviewMessage> for WireMessage {
    fn from(message: &ReviewMessage) -> Self {
        Self {
            kind: Some(REVIEW_MESSAGE_TYPE.to_string()),
            user_id: Some(message.user_id().to_string()),
            hotel_id: Some(message.hotel_id().to_string()),
            rating: Some(i64::from(message.rating())),
            comment: Some(message.comment().to_string()),
        }
    }
}

/// Request body of `POST /functions/v1/verify-review-signature`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerifyRequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<WireMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}

impl VerifyRequestBody {
    /// Body for verifying a stored review, or `None` if it is unsigned.
    ///
    /// The message carries the review's own stored fields.
    pub fn from_review(review: &Review) -> Option<Self> {
        let claim = review.signature_claim()?;
        Some(Self {
            message: Some(WireMessage {
                kind: Some(REVIEW_MESSAGE_TYPE.to_string()),
                user_id: Some(review.user_id.clone()),
                hotel_id: Some(review.hotel_id.clone()),
                rating: Some(review.rating),
                comment: Some(review.comment.clone()),
            }),
            signature: Some(claim.signature.to_string()),
            wallet_address: Some(claim.wallet_address.to_string()),
        })
    }

    /// Validate into a [`VerificationRequest`].
    ///
    /// # Errors
    /// `MalformedInput` when a top-level field is missing or empty, or when the
    /// message fields cannot form a canonical message.
    pub fn into_request(self) -> Result<VerificationRequest, ServiceError> {
        let (message, signature, wallet_address) =
            match (self.message, self.signature, self.wallet_address) {
                (Some(message), Some(signature), Some(wallet_address))
                    if !signature.is_empty() && !wallet_address.is_empty() =>
                {
                    (message, signature, wallet_address)
                }
                _ => return Err(ServiceError::MalformedInput(MISSING_FIELDS.to_string())),
            };

        Ok(VerificationRequest {
            message: message.to_canonical()?,
            signature,
            wallet_address,
        })
    }
}

/// Response body of a completed verification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerificationResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(
        rename = "recoveredAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recovered_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&VerificationOutcome> for VerificationResponse {
    fn from(outcome: &VerificationOutcome) -> Self {
        Self {
            valid: outcome.valid,
            recovered_address: outcome.recovered_address.map(|a| a.to_hex()),
            error: outcome.error.as_ref().map(ToString::to_string),
        }
    }
}
