//! # Verify Gateway (RS-03)
//!
//! HTTP surface of the review verifier.
//!
//! ## Routes
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/functions/v1/verify-review-signature` | Verify a review signature |
//! | `POST` | `/verify` | Same endpoint, short path |
//! | `OPTIONS` | both of the above | CORS preflight, `204 No Content` |
//! | `GET` | `/health` | Liveness |
//! | `GET` | `/metrics` | Prometheus text exposition |
//!
//! ## Middleware Order
//!
//! Request → Tracing → Preflight → CORS → Timeout (optional) → Body limit → Handler
//!
//! ## Client
//!
//! [`HttpVerificationClient`] implements the verification client port over
//! this endpoint, so a review page can drive a
//! [`VerificationBoard`](rs_02_signature_verification::VerificationBoard)
//! against a remote verifier.

pub mod client;
pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod service;

pub use client::HttpVerificationClient;
pub use domain::config::{CorsConfig, GatewayConfig, HttpConfig, LimitsConfig, TimeoutConfig};
pub use domain::error::{ApiError, ConfigError, ErrorBody, GatewayError};
pub use service::{build_router, AppState, VerifyGatewayService, VERIFY_PATH, VERIFY_SHORT_PATH};
