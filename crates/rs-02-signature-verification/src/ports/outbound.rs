//! # Outbound Ports (Driven Ports / SPI)
//!
//! How a review page reaches a verifier.

use crate::domain::errors::ClientError;
use crate::domain::wire::{VerificationResponse, VerifyRequestBody};
use async_trait::async_trait;

/// A remote or in-process verification endpoint.
#[async_trait]
pub trait VerificationClient: Send + Sync {
    /// Submit one verification request.
    ///
    /// # Errors
    /// Any failure to obtain a completed verification: transport, non-success
    /// status, or an undecodable body.
    async fn verify(&self, body: VerifyRequestBody) -> Result<VerificationResponse, ClientError>;
}
