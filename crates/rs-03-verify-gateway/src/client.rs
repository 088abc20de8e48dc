//! [`reqwest`]-backed implementation of [`VerificationClient`].

use crate::domain::error::ErrorBody;
use crate::service::VERIFY_PATH;
use async_trait::async_trait;
use rs_02_signature_verification::{
    ClientError, VerificationClient, VerificationResponse, VerifyRequestBody,
};
use std::time::Duration;
use tracing::debug;

/// Calls a remote verify endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpVerificationClient {
    inner: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpVerificationClient {
    /// Client for the gateway at `base_url` (scheme, host and optional prefix).
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Client with a whole-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self::with_client(inner, base_url))
    }

    fn with_client(inner: reqwest::Client, base_url: &str) -> Self {
        Self {
            inner,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), VERIFY_PATH),
            api_key: None,
        }
    }

    /// Send `apikey` and bearer authorization headers on every call.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Full URL of the verify endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl VerificationClient for HttpVerificationClient {
    async fn verify(&self, body: VerifyRequestBody) -> Result<VerificationResponse, ClientError> {
        let mut request = self.inner.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        debug!(endpoint = %self.endpoint, status = status.as_u16(), "verify call returned");

        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<VerificationResponse>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
