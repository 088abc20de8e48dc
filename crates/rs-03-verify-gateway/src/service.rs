//! Verify gateway service - main entry point.
//!
//! Owns the configuration and the verifier, builds the router and runs the
//! HTTP server until shutdown is requested.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::handlers;
use crate::middleware::{create_cors_layer, preflight_no_content, TracingLayer};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, MethodRouter};
use axum::Router;
use rs_02_signature_verification::ReviewVerificationApi;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::timeout::TimeoutLayer;
use tracing::{info, warn};

/// Path of the verification endpoint.
pub const VERIFY_PATH: &str = "/functions/v1/verify-review-signature";

/// Short alias of [`VERIFY_PATH`].
pub const VERIFY_SHORT_PATH: &str = "/verify";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn ReviewVerificationApi>,
}

impl AppState {
    pub fn new(verifier: Arc<dyn ReviewVerificationApi>) -> Self {
        Self { verifier }
    }
}

fn verify_endpoint() -> MethodRouter<AppState> {
    post(handlers::verify_signature)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed)
}

/// Build the gateway router with its middleware stack.
pub fn build_router(config: &GatewayConfig, state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new()
        .route(VERIFY_PATH, verify_endpoint())
        .route(VERIFY_SHORT_PATH, verify_endpoint())
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .layer(DefaultBodyLimit::max(config.limits.max_request_size));

    if let Some(timeout) = config.timeouts.request_timeout() {
        router = router.layer(TimeoutLayer::new(timeout));
    }

    router
        .layer(create_cors_layer(&config.cors))
        .layer(axum::middleware::from_fn(preflight_no_content))
        .layer(TracingLayer::new())
        .with_state(state)
}

/// Verify gateway service
pub struct VerifyGatewayService {
    config: GatewayConfig,
    state: AppState,
    shutdown_tx: watch::Sender<bool>,
}

impl VerifyGatewayService {
    /// Create a new gateway service
    pub fn new(
        config: GatewayConfig,
        verifier: Arc<dyn ReviewVerificationApi>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;
        realstay_telemetry::register_metrics()
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        let (shutdown_tx, _) = watch::channel(false);
        Ok(Self {
            config,
            state: AppState::new(verifier),
            shutdown_tx,
        })
    }

    /// Gateway configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Router with all routes and middleware installed
    pub fn router(&self) -> Router {
        build_router(&self.config, self.state.clone())
    }

    /// Bind the configured address and serve until [`shutdown`](Self::shutdown).
    pub async fn start(&self) -> Result<(), GatewayError> {
        if !self.config.http.enabled {
            warn!("HTTP server disabled, nothing to serve");
            return Ok(());
        }

        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{addr}: {e}")))?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener until shutdown is requested.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), GatewayError> {
        let addr = listener
            .local_addr()
            .map_err(|e| GatewayError::Bind(e.to_string()))?;
        info!(%addr, path = VERIFY_PATH, "Verify gateway listening");

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.wait_for(|stop| *stop).await;
            })
            .await
            .map_err(|e| GatewayError::Server(e.to_string()))?;

        info!("Verify gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);
    }
}
