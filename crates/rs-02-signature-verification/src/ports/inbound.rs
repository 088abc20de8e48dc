//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{
    BatchVerificationResult, ReviewVerdict, VerificationOutcome, VerificationRequest,
};
use crate::domain::errors::ServiceError;
use crate::domain::wire::VerifyRequestBody;
use shared_types::Review;

/// Review signature verification API.
///
/// Implementations must be thread-safe (`Send + Sync`) and pure: the same
/// input always yields the same outcome.
pub trait ReviewVerificationApi: Send + Sync {
    /// Verify a validated request, trying the trailing-newline variant once
    /// if the canonical bytes do not match.
    fn verify_request(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, ServiceError>;

    /// Validate and verify an endpoint request body.
    fn verify_body(&self, body: VerifyRequestBody) -> Result<VerificationOutcome, ServiceError>;

    /// Verify a stored review. Reviews without a complete claim are
    /// [`ReviewVerdict::Unsigned`].
    fn verify_review(&self, review: &Review) -> Result<ReviewVerdict, ServiceError>;

    /// Verify many independent requests in parallel.
    fn batch_verify(&self, requests: &[VerificationRequest]) -> BatchVerificationResult;
}
