//! # Verifier Runtime Library
//!
//! Wires the verification service into the HTTP gateway. The binary in
//! `main.rs` drives it; tests drive it directly.

use std::sync::Arc;

use anyhow::{Context, Result};
use rs_02_signature_verification::ReviewVerificationService;
use rs_03_verify_gateway::{GatewayConfig, VerifyGatewayService};
use tokio::net::TcpListener;
use tracing::info;

/// The verifier process: one gateway over one stateless verification service.
pub struct VerifierRuntime {
    gateway: Arc<VerifyGatewayService>,
}

impl VerifierRuntime {
    /// Create a runtime for `config`.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let verifier = Arc::new(ReviewVerificationService::new());
        let gateway = VerifyGatewayService::new(config, verifier)
            .context("Failed to create verify gateway")?;

        Ok(Self {
            gateway: Arc::new(gateway),
        })
    }

    /// Create a runtime from `RS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let config = GatewayConfig::from_env().context("Invalid gateway configuration")?;
        Self::new(config)
    }

    /// Serve on the configured address until [`shutdown`](Self::shutdown).
    pub async fn run(&self) -> Result<()> {
        let config = self.gateway.config();
        info!("===========================================");
        info!("  RealStay Review Verifier v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");
        info!(
            addr = %config.http_addr(),
            max_body = config.limits.max_request_size,
            timeout_secs = ?config.timeouts.request_timeout_secs,
            "Starting verifier"
        );

        self.gateway.start().await.context("Verify gateway failed")
    }

    /// Serve on an already bound listener until [`shutdown`](Self::shutdown).
    pub async fn run_on(&self, listener: TcpListener) -> Result<()> {
        self.gateway
            .serve(listener)
            .await
            .context("Verify gateway failed")
    }

    /// Stop accepting connections and let in-flight requests finish.
    pub fn shutdown(&self) {
        info!("Initiating graceful shutdown...");
        self.gateway.shutdown();
    }
}
