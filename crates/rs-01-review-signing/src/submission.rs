//! # Review Submission
//!
//! The submit flow: validate, sign once, store. A signing failure never stops
//! the review from being stored.

use crate::domain::entities::SubmittedReview;
use crate::domain::errors::SubmitError;
use crate::ports::outbound::{ReviewStore, WalletSigner};
use crate::service::ReviewSigner;
use shared_types::{NewReview, ReviewDraft};
use std::sync::Arc;
use tracing::{error, info};

/// Orchestrates signing and persistence of a new review.
pub struct ReviewSubmission<W: WalletSigner, S: ReviewStore> {
    signer: Arc<ReviewSigner<W>>,
    store: Arc<S>,
}

impl<W: WalletSigner, S: ReviewStore> ReviewSubmission<W, S> {
    pub fn new(signer: Arc<ReviewSigner<W>>, store: Arc<S>) -> Self {
        Self { signer, store }
    }

    pub fn signer(&self) -> &ReviewSigner<W> {
        &self.signer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit a review.
    ///
    /// # Errors
    /// - `MissingComment`: empty comment, checked before any wallet prompt
    /// - `InProgress`: another submission holds this signer
    /// - `Store`: the insert failed
    pub async fn submit(&self, draft: ReviewDraft) -> Result<SubmittedReview, SubmitError> {
        if draft.comment.trim().is_empty() {
            return Err(SubmitError::MissingComment);
        }

        let guard = self
            .signer
            .try_begin()
            .map_err(|_| SubmitError::InProgress)?;

        let outcome = self.signer.sign_in_flight(&guard, &draft).await;
        let signed = outcome.signed.is_signed();

        let review = self
            .store
            .insert(NewReview {
                draft,
                signed: outcome.signed,
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Review insert failed");
                SubmitError::Store(e)
            })?;

        info!(review_id = %review.id, signed, "Review submitted");

        Ok(SubmittedReview {
            review,
            notice: outcome.notice,
        })
    }
}
