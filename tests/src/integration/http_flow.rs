//! # HTTP Flow
//!
//! The review page talks to a verifier behind a real TCP listener through
//! [`HttpVerificationClient`](rs_03_verify_gateway::HttpVerificationClient).

#[cfg(test)]
mod tests {
    use super::super::connected_submission;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;

    use rs_01_review_signing::{LocalKeyWallet, ReviewStore};
    use rs_02_signature_verification::{
        ClientError, ReviewDisplayState, ReviewVerificationService, VerificationBoard,
        VerificationClient, VerifyRequestBody,
    };
    use rs_03_verify_gateway::{GatewayConfig, HttpVerificationClient, VerifyGatewayService};
    use shared_types::ReviewDraft;
    use tokio::net::TcpListener;

    async fn start_gateway() -> (Arc<VerifyGatewayService>, SocketAddr) {
        let service = Arc::new(
            VerifyGatewayService::new(
                GatewayConfig::default(),
                Arc::new(ReviewVerificationService::new()),
            )
            .unwrap(),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Arc::clone(&service);
        tokio::spawn(async move { server.serve(listener).await });
        (service, addr)
    }

    #[tokio::test]
    async fn test_board_over_http() {
        let (gateway, addr) = start_gateway().await;
        let client = HttpVerificationClient::new(&format!("http://{addr}"));

        let submission = connected_submission(LocalKeyWallet::random()).await;
        let newline = connected_submission(
            LocalKeyWallet::random()
                .with_behavior(rs_01_review_signing::WalletBehavior::AppendNewline),
        )
        .await;

        let good = submission
            .submit(ReviewDraft::new("user-1", "hotel-5", 5, "Great stay"))
            .await
            .unwrap()
            .review;
        let mut edited = submission
            .submit(ReviewDraft::new("user-2", "hotel-5", 2, "Great stay"))
            .await
            .unwrap()
            .review;
        edited.comment = "Great stay!".to_string();
        let padded = newline
            .submit(ReviewDraft::new("user-3", "hotel-5", 4, "Nice view"))
            .await
            .unwrap()
            .review;

        let reviews = vec![good.clone(), edited.clone(), padded.clone()];
        let board = VerificationBoard::new();
        board.verify_all(&reviews, &client).await;

        assert_eq!(board.state(&good.id), Some(ReviewDisplayState::Valid));
        assert_eq!(board.state(&edited.id), Some(ReviewDisplayState::Invalid));
        assert_eq!(board.state(&padded.id), Some(ReviewDisplayState::Valid));

        gateway.shutdown();
    }

    #[tokio::test]
    async fn test_stored_review_round_trips_over_http() {
        let (gateway, addr) = start_gateway().await;
        let client = HttpVerificationClient::with_timeout(
            &format!("http://{addr}"),
            Duration::from_secs(5),
        )
        .unwrap()
        .with_api_key("anon-key");

        let submission = connected_submission(LocalKeyWallet::random()).await;
        let review = submission
            .submit(ReviewDraft::new("user-1", "hotel-5", 5, "Great stay"))
            .await
            .unwrap()
            .review;
        let stored = submission.store().get(&review.id).await.unwrap().unwrap();

        let body = VerifyRequestBody::from_review(&stored).unwrap();
        let response = client.verify(body).await.unwrap();
        assert!(response.valid);
        assert_eq!(
            response.recovered_address.as_deref(),
            stored.wallet_address.as_deref()
        );

        gateway.shutdown();
    }

    #[tokio::test]
    async fn test_missing_fields_surface_as_status_error() {
        let (gateway, addr) = start_gateway().await;
        let client = HttpVerificationClient::new(&format!("http://{addr}"));

        let result = client.verify(VerifyRequestBody::default()).await;
        assert!(matches!(
            result,
            Err(ClientError::Status { status: 400, .. })
        ));

        gateway.shutdown();
    }

    #[tokio::test]
    async fn test_unreachable_verifier_marks_invalid() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = HttpVerificationClient::new(&format!("http://{addr}"));

        let submission = connected_submission(LocalKeyWallet::random()).await;
        let review = submission
            .submit(ReviewDraft::new("user-1", "hotel-5", 5, "Great stay"))
            .await
            .unwrap()
            .review;

        let board = VerificationBoard::new();
        board.verify_all(std::slice::from_ref(&review), &client).await;
        assert_eq!(board.state(&review.id), Some(ReviewDisplayState::Invalid));
    }
}
