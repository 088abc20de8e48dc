//! # Sign → Store → Verify
//!
//! Reviews produced by the signer verify with the server-side verifier after a
//! round trip through the store, and any post-signing edit is detected.

#[cfg(test)]
mod tests {
    use super::super::connected_submission;
    use std::sync::Arc;
    use std::time::Duration;

    use rs_01_review_signing::{
        InMemoryReviewStore, LocalKeyWallet, ReviewSigner, ReviewStore, ReviewSubmission,
        SkipReason, WalletBehavior, WalletError,
    };
    use rs_02_signature_verification::{
        LocalVerificationClient, ReviewDisplayState, ReviewVerdict, ReviewVerificationApi,
        ReviewVerificationService, VerificationBoard, VerificationRequest,
    };
    use shared_types::{Review, ReviewDraft};

    fn verifier() -> ReviewVerificationService {
        ReviewVerificationService::new()
    }

    async fn stored(review: &Review, store: &InMemoryReviewStore) -> Review {
        store.get(&review.id).await.unwrap().unwrap()
    }

    // =========================================================================
    // SCENARIOS
    // =========================================================================

    #[tokio::test]
    async fn test_great_stay_verifies() {
        let submission = connected_submission(LocalKeyWallet::random()).await;
        let submitted = submission
            .submit(ReviewDraft::new("user-1", "hotel-1", 5, "Great stay"))
            .await
            .unwrap();

        assert!(submitted.notice.is_none());
        let review = stored(&submitted.review, submission.store()).await;
        assert!(review.message_hash.is_some());

        let verdict = verifier().verify_review(&review).unwrap();
        assert!(verdict.is_valid());
    }

    #[tokio::test]
    async fn test_edited_comment_is_invalid() {
        let submission = connected_submission(LocalKeyWallet::random()).await;
        let submitted = submission
            .submit(ReviewDraft::new("user-1", "hotel-1", 5, "Great stay"))
            .await
            .unwrap();

        let mut review = stored(&submitted.review, submission.store()).await;
        review.comment = "Great stay!".to_string();

        match verifier().verify_review(&review).unwrap() {
            ReviewVerdict::Checked(outcome) => {
                assert!(!outcome.valid);
                assert!(outcome.error.is_none());
            }
            ReviewVerdict::Unsigned => panic!("signed review reported unsigned"),
        }
    }

    #[tokio::test]
    async fn test_edited_rating_is_invalid() {
        let submission = connected_submission(LocalKeyWallet::random()).await;
        let submitted = submission
            .submit(ReviewDraft::new("user-1", "hotel-1", 2, "Noisy at night"))
            .await
            .unwrap();

        let mut review = stored(&submitted.review, submission.store()).await;
        review.rating = 5;

        assert!(!verifier().verify_review(&review).unwrap().is_valid());
    }

    #[tokio::test]
    async fn test_newline_wallet_verifies() {
        let wallet = LocalKeyWallet::random().with_behavior(WalletBehavior::AppendNewline);
        let submission = connected_submission(wallet).await;
        let submitted = submission
            .submit(ReviewDraft::new("user-2", "hotel-1", 4, "Lovely staff"))
            .await
            .unwrap();

        let review = stored(&submitted.review, submission.store()).await;
        match verifier().verify_review(&review).unwrap() {
            ReviewVerdict::Checked(outcome) => {
                assert!(outcome.valid);
                assert!(outcome.used_newline_fallback());
            }
            ReviewVerdict::Unsigned => panic!("signed review reported unsigned"),
        }
    }

    #[tokio::test]
    async fn test_rejected_signature_still_submits_unsigned() {
        let submission = connected_submission(LocalKeyWallet::random()).await;
        // The user connected earlier but declines this prompt.
        submission
            .signer()
            .wallet()
            .unwrap()
            .set_behavior(WalletBehavior::Reject);
        let submitted = submission
            .submit(ReviewDraft::new("user-3", "hotel-1", 3, "Fine"))
            .await
            .unwrap();

        let notice = submitted.notice.expect("rejection is reported");
        assert!(matches!(
            notice.reason,
            SkipReason::Wallet(WalletError::UserRejected)
        ));

        let review = stored(&submitted.review, submission.store()).await;
        assert!(review.signature.is_none());
        assert!(review.wallet_address.is_none());
        assert!(matches!(
            verifier().verify_review(&review).unwrap(),
            ReviewVerdict::Unsigned
        ));
    }

    #[tokio::test]
    async fn test_no_wallet_submits_unsigned() {
        let submission = ReviewSubmission::new(
            Arc::new(ReviewSigner::<LocalKeyWallet>::without_wallet()),
            Arc::new(InMemoryReviewStore::new()),
        );

        let submitted = submission
            .submit(ReviewDraft::new("user-4", "hotel-2", 5, "Would return"))
            .await
            .unwrap();

        assert!(submitted.notice.is_none());
        assert!(submitted.review.signature.is_none());
    }

    #[tokio::test]
    async fn test_second_concurrent_submit_is_refused() {
        let wallet = LocalKeyWallet::random().with_latency(Duration::from_millis(100));
        let submission = Arc::new(connected_submission(wallet).await);

        let first = {
            let submission = Arc::clone(&submission);
            tokio::spawn(async move {
                submission
                    .submit(ReviewDraft::new("user-5", "hotel-3", 5, "First"))
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let second = submission
            .submit(ReviewDraft::new("user-5", "hotel-3", 5, "Second"))
            .await;
        assert!(second.is_err());

        assert!(first.await.unwrap().is_ok());
        assert_eq!(submission.store().len(), 1);
    }

    // =========================================================================
    // REVIEW PAGE
    // =========================================================================

    #[tokio::test]
    async fn test_board_marks_each_review() {
        let signed = connected_submission(LocalKeyWallet::random()).await;
        let store = signed.store();

        let good = signed
            .submit(ReviewDraft::new("user-1", "hotel-9", 5, "Great stay"))
            .await
            .unwrap()
            .review;
        let edited = signed
            .submit(ReviewDraft::new("user-2", "hotel-9", 4, "Great stay"))
            .await
            .unwrap()
            .review;

        let mut tampered = stored(&edited, store).await;
        tampered.comment = "Great stay!".to_string();
        store.put(tampered);

        let unsigned = ReviewSubmission::new(
            Arc::new(ReviewSigner::<LocalKeyWallet>::without_wallet()),
            Arc::new(InMemoryReviewStore::new()),
        )
        .submit(ReviewDraft::new("user-3", "hotel-9", 3, "Okay"))
        .await
        .unwrap()
        .review;
        store.put(unsigned.clone());

        let reviews = store.list_by_hotel("hotel-9").await.unwrap();
        let client = LocalVerificationClient::new(Arc::new(verifier()));
        let board = VerificationBoard::new();
        board.verify_all(&reviews, &client).await;

        assert_eq!(board.state(&good.id), Some(ReviewDisplayState::Valid));
        assert_eq!(board.state(&edited.id), Some(ReviewDisplayState::Invalid));
        assert_eq!(board.state(&unsigned.id), Some(ReviewDisplayState::Unsigned));
        assert_eq!(board.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_verifications_keep_their_inputs() {
        let submission = connected_submission(LocalKeyWallet::random()).await;
        let mut reviews = Vec::new();
        for i in 0..16 {
            let review = submission
                .submit(ReviewDraft::new(
                    format!("user-{i}"),
                    "hotel-7",
                    (i % 5) + 1,
                    format!("Stay number {i}"),
                ))
                .await
                .unwrap()
                .review;
            reviews.push(review);
        }
        // Every odd review is edited after signing.
        for review in reviews.iter_mut().skip(1).step_by(2) {
            review.comment.push('!');
        }

        let service = Arc::new(verifier());
        let handles: Vec<_> = reviews
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, review)| {
                let service = Arc::clone(&service);
                tokio::task::spawn_blocking(move || {
                    (i, service.verify_review(&review).unwrap().is_valid())
                })
            })
            .collect();

        for handle in handles {
            let (i, valid) = handle.await.unwrap();
            assert_eq!(valid, i % 2 == 0, "review {i}");
        }
    }

    #[tokio::test]
    async fn test_batch_matches_individual_results() {
        let submission = connected_submission(LocalKeyWallet::random()).await;
        let mut requests = Vec::new();
        for comment in ["Great stay", "Clean rooms", "Friendly"] {
            let review = submission
                .submit(ReviewDraft::new("user-1", "hotel-1", 5, comment))
                .await
                .unwrap()
                .review;
            requests.push(VerificationRequest::from_review(&review).unwrap().unwrap());
        }

        let result = verifier().batch_verify(&requests);
        assert_eq!(result.valid_count, 3);
        assert!(result.all_valid());
    }
}
