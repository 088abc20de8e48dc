//! # Verification Board
//!
//! Per-review display state for a page of reviews. Signed reviews start
//! `Pending`; each verification call resolves its own review, in whatever
//! order the calls complete.

use crate::domain::display::ReviewDisplayState;
use crate::domain::errors::ClientError;
use crate::domain::wire::{VerificationResponse, VerifyRequestBody};
use crate::ports::outbound::VerificationClient;
use futures::future::join_all;
use parking_lot::RwLock;
use shared_types::Review;
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct VerificationBoard {
    states: RwLock<HashMap<String, ReviewDisplayState>>,
}

impl VerificationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register reviews: unsigned ones settle immediately, signed ones
    /// become pending.
    pub fn track(&self, reviews: &[Review]) {
        let mut states = self.states.write();
        for review in reviews {
            let state = if review.signature_claim().is_some() {
                ReviewDisplayState::Pending
            } else {
                ReviewDisplayState::Unsigned
            };
            states.insert(review.id.clone(), state);
        }
    }

    /// Apply the result of one verification call.
    ///
    /// Valid only when the call succeeded with `valid == true`. Unknown and
    /// unsigned reviews are left alone. Returns the new state if applied.
    pub fn resolve(
        &self,
        review_id: &str,
        result: Result<VerificationResponse, ClientError>,
    ) -> Option<ReviewDisplayState> {
        let mut states = self.states.write();
        let state = states.get_mut(review_id)?;

        if *state == ReviewDisplayState::Unsigned {
            return None;
        }

        *state = match result {
            Ok(response) if response.valid => ReviewDisplayState::Valid,
            Ok(response) => {
                debug!(review_id, error = ?response.error, "Signature did not verify");
                ReviewDisplayState::Invalid
            }
            Err(e) => {
                warn!(review_id, error = %e, "Verification call failed");
                ReviewDisplayState::Invalid
            }
        };
        Some(*state)
    }

    /// Track `reviews` and verify every signed one concurrently.
    pub async fn verify_all<C>(&self, reviews: &[Review], client: &C)
    where
        C: VerificationClient + ?Sized,
    {
        self.track(reviews);

        let calls = reviews.iter().filter_map(|review| {
            let body = VerifyRequestBody::from_review(review)?;
            let review_id = review.id.as_str();
            Some(async move {
                let result = client.verify(body).await;
                self.resolve(review_id, result);
            })
        });

        join_all(calls).await;
    }

    pub fn state(&self, review_id: &str) -> Option<ReviewDisplayState> {
        self.states.read().get(review_id).copied()
    }

    /// Copy of every tracked state.
    pub fn snapshot(&self) -> HashMap<String, ReviewDisplayState> {
        self.states.read().clone()
    }

    /// Number of reviews still waiting on a verification call.
    pub fn pending_count(&self) -> usize {
        self.states
            .read()
            .values()
            .filter(|s| **s == ReviewDisplayState::Pending)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::time::Duration;

    fn review(id: &str, signed: bool) -> Review {
        Review {
            id: id.into(),
            user_id: "u1".into(),
            hotel_id: "h1".into(),
            rating: 5,
            comment: format!("review {id}"),
            created_at: Utc::now(),
            wallet_address: signed.then(|| "0x00000000000000000000000000000000000000aa".into()),
            signature: signed.then(|| "0xsig".into()),
            message_hash: None,
        }
    }

    fn response(valid: bool) -> Result<VerificationResponse, ClientError> {
        Ok(VerificationResponse {
            valid,
            ..VerificationResponse::default()
        })
    }

    /// Answers by comment; "review slow" takes longer than the others.
    struct ScriptedClient;

    #[async_trait]
    impl VerificationClient for ScriptedClient {
        async fn verify(
            &self,
            body: VerifyRequestBody,
        ) -> Result<VerificationResponse, ClientError> {
            let comment = body
                .message
                .and_then(|m| m.comment)
                .unwrap_or_default();

            match comment.as_str() {
                "review slow" => {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    response(true)
                }
                "review bad" => response(false),
                "review down" => Err(ClientError::Transport("connection refused".into())),
                _ => response(true),
            }
        }
    }

    #[test]
    fn test_track_sets_initial_states() {
        let board = VerificationBoard::new();
        board.track(&[review("a", true), review("b", false)]);

        assert_eq!(board.state("a"), Some(ReviewDisplayState::Pending));
        assert_eq!(board.state("b"), Some(ReviewDisplayState::Unsigned));
        assert_eq!(board.state("c"), None);
        assert_eq!(board.pending_count(), 1);
    }

    #[test]
    fn test_resolve_rules() {
        let board = VerificationBoard::new();
        board.track(&[review("a", true), review("b", true), review("u", false)]);

        assert_eq!(board.resolve("a", response(true)), Some(ReviewDisplayState::Valid));
        assert_eq!(
            board.resolve("b", Err(ClientError::Transport("down".into()))),
            Some(ReviewDisplayState::Invalid)
        );

        // Ignored
        assert_eq!(board.resolve("u", response(true)), None);
        assert_eq!(board.resolve("missing", response(true)), None);
        assert_eq!(board.state("u"), Some(ReviewDisplayState::Unsigned));
    }

    #[test]
    fn test_out_of_order_resolution() {
        let board = VerificationBoard::new();
        board.track(&[review("a", true), review("b", true)]);

        board.resolve("b", response(false));
        assert_eq!(board.state("a"), Some(ReviewDisplayState::Pending));

        board.resolve("a", response(true));
        assert_eq!(board.state("a"), Some(ReviewDisplayState::Valid));
        assert_eq!(board.state("b"), Some(ReviewDisplayState::Invalid));
    }

    #[tokio::test]
    async fn test_verify_all_resolves_each_review() {
        let board = VerificationBoard::new();
        let reviews = vec![
            review("slow", true),
            review("bad", true),
            review("down", true),
            review("ok", true),
            review("plain", false),
        ];

        board.verify_all(&reviews, &ScriptedClient).await;

        let snapshot = board.snapshot();
        assert_eq!(snapshot["slow"], ReviewDisplayState::Valid);
        assert_eq!(snapshot["bad"], ReviewDisplayState::Invalid);
        assert_eq!(snapshot["down"], ReviewDisplayState::Invalid);
        assert_eq!(snapshot["ok"], ReviewDisplayState::Valid);
        assert_eq!(snapshot["plain"], ReviewDisplayState::Unsigned);
        assert_eq!(board.pending_count(), 0);
    }
}
