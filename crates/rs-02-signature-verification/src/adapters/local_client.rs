//! # In-Process Verification Client
//!
//! [`VerificationClient`] that calls a verification API directly, mapping
//! results the way the HTTP endpoint does.

use crate::domain::errors::{ClientError, ServiceError};
use crate::domain::wire::{VerificationResponse, VerifyRequestBody};
use crate::ports::inbound::ReviewVerificationApi;
use crate::ports::outbound::VerificationClient;
use async_trait::async_trait;
use std::sync::Arc;

pub struct LocalVerificationClient<A: ReviewVerificationApi> {
    api: Arc<A>,
}

impl<A: ReviewVerificationApi> LocalVerificationClient<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: ReviewVerificationApi + 'static> VerificationClient for LocalVerificationClient<A> {
    async fn verify(&self, body: VerifyRequestBody) -> Result<VerificationResponse, ClientError> {
        match self.api.verify_body(body) {
            Ok(outcome) => Ok(VerificationResponse::from(&outcome)),
            Err(e @ ServiceError::MalformedInput(_)) => Err(ClientError::Status {
                status: 400,
                message: e.to_string(),
            }),
            Err(e @ ServiceError::Internal(_)) => Err(ClientError::Status {
                status: 500,
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wire::WireMessage;
    use crate::service::ReviewVerificationService;
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::{ReviewMessage, WalletAddress};

    #[tokio::test]
    async fn test_valid_roundtrip() {
        let keypair = Secp256k1KeyPair::generate();
        let message = ReviewMessage::new("u1", "h1", 5, "Great stay").unwrap();
        let signature = keypair
            .sign_personal(&message.to_canonical_bytes().unwrap())
            .unwrap();
        let address = WalletAddress::from_bytes(keypair.address());

        let client = LocalVerificationClient::new(Arc::new(ReviewVerificationService::new()));
        let response = client
            .verify(VerifyRequestBody {
                message: Some(WireMessage::from(&message)),
                signature: Some(signature.to_hex()),
                wallet_address: Some(address.to_hex()),
            })
            .await
            .unwrap();

        assert!(response.valid);
        assert_eq!(response.recovered_address, Some(address.to_hex()));
        assert_eq!(response.error, None);
    }

    #[tokio::test]
    async fn test_missing_fields_map_to_400() {
        let client = LocalVerificationClient::new(Arc::new(ReviewVerificationService::new()));
        let result = client.verify(VerifyRequestBody::default()).await;

        assert!(matches!(
            result,
            Err(ClientError::Status { status: 400, .. })
        ));
    }
}
