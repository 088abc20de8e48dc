//! # Review Verification Service
//!
//! Application service layer that implements the `ReviewVerificationApi` trait.
//!
//! Delegates cryptographic work to the domain layer. Holds no state, so one
//! instance can be shared freely across request handlers.

use crate::domain::entities::{
    BatchVerificationResult, ReviewVerdict, VerificationOutcome, VerificationRequest,
};
use crate::domain::errors::ServiceError;
use crate::domain::policy;
use crate::domain::wire::VerifyRequestBody;
use crate::ports::inbound::ReviewVerificationApi;
use realstay_telemetry::{
    record_verification, HistogramTimer, VerificationLabel, NEWLINE_FALLBACKS,
    VERIFICATION_DURATION,
};
use shared_types::Review;
use tracing::{debug, warn};

/// Review Verification Service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewVerificationService;

impl ReviewVerificationService {
    pub fn new() -> Self {
        Self
    }
}

impl ReviewVerificationApi for ReviewVerificationService {
    fn verify_request(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, ServiceError> {
        let _timer = HistogramTimer::new(&VERIFICATION_DURATION);

        let bytes = request.message.to_canonical_bytes().map_err(|e| {
            record_verification(VerificationLabel::Error);
            ServiceError::from(e)
        })?;
        let outcome = policy::verify_claim(&bytes, &request.signature, &request.wallet_address);

        debug!(
            valid = outcome.valid,
            newline_fallback = outcome.used_newline_fallback(),
            recovered = ?outcome.recovered_address,
            "Review signature checked"
        );
        record_outcome(&outcome);

        Ok(outcome)
    }

    fn verify_body(&self, body: VerifyRequestBody) -> Result<VerificationOutcome, ServiceError> {
        let request = body.into_request()?;
        self.verify_request(&request)
    }

    fn verify_review(&self, review: &Review) -> Result<ReviewVerdict, ServiceError> {
        match VerificationRequest::from_review(review)? {
            None => {
                record_verification(VerificationLabel::Unsigned);
                Ok(ReviewVerdict::Unsigned)
            }
            Some(request) => self.verify_request(&request).map(ReviewVerdict::Checked),
        }
    }

    fn batch_verify(&self, requests: &[VerificationRequest]) -> BatchVerificationResult {
        use rayon::prelude::*;

        let results = requests
            .par_iter()
            .map(|request| self.verify_request(request))
            .collect();

        BatchVerificationResult::from_results(results)
    }
}

fn record_outcome(outcome: &VerificationOutcome) {
    let label = if outcome.valid {
        VerificationLabel::Valid
    } else if outcome.error.is_some() {
        VerificationLabel::Error
    } else {
        VerificationLabel::Invalid
    };
    record_verification(label);

    if outcome.used_newline_fallback() {
        NEWLINE_FALLBACKS.inc();
    }
    if let Some(error) = &outcome.error {
        warn!(%error, "signature recovery failed");
    }
}
