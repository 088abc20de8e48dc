//! Request handlers.

use crate::domain::error::{ApiError, ApiResult};
use crate::service::AppState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use realstay_telemetry::{encode_metrics, record_verification, VerificationLabel};
use rs_02_signature_verification::{ServiceError, VerificationResponse, VerifyRequestBody};
use std::sync::Arc;
use tracing::{debug, error};

/// `POST /functions/v1/verify-review-signature`
///
/// Recovery runs on the blocking pool; the body is parsed here so a
/// malformed payload never reaches it.
pub async fn verify_signature(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<VerificationResponse>> {
    let body = body?;
    let request: VerifyRequestBody =
        serde_json::from_slice(&body).map_err(ApiError::parse_error)?;

    let api = Arc::clone(&state.verifier);
    let result = tokio::task::spawn_blocking(move || api.verify_body(request))
        .await
        .map_err(|e| {
            error!(error = %e, "verification task failed");
            record_verification(VerificationLabel::Error);
            ApiError::internal(format!("verification task failed: {e}"))
        })?;

    match result {
        Ok(outcome) => Ok(Json(VerificationResponse::from(&outcome))),
        Err(ServiceError::MalformedInput(message)) => {
            debug!(%message, "rejected verification request");
            Err(ApiError::bad_request(message))
        }
        Err(ServiceError::Internal(message)) => {
            error!(%message, "verification failed internally");
            Err(ApiError::internal(message))
        }
    }
}

/// `OPTIONS` on the endpoint without a CORS request method.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Any other method on the endpoint.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "verify-review-signature",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Prometheus text exposition
pub async fn metrics() -> ApiResult<impl IntoResponse> {
    let body = encode_metrics().map_err(|e| ApiError::internal(e.to_string()))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}
