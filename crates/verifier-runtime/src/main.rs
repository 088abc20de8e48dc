//! # RealStay Review Verifier
//!
//! Serves `POST /functions/v1/verify-review-signature`.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logging filter, Prometheus registry)
//! 2. Load gateway configuration from `RS_*` environment variables
//! 3. Bind and serve
//! 4. On Ctrl+C, drain in-flight requests and exit

use std::sync::Arc;

use anyhow::Result;
use realstay_telemetry::{init_telemetry, TelemetryConfig};
use tracing::{error, info};
use verifier_runtime::VerifierRuntime;

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::from_env())?;

    let runtime = Arc::new(VerifierRuntime::from_env()?);

    let mut server = {
        let runtime = Arc::clone(&runtime);
        tokio::spawn(async move { runtime.run().await })
    };

    info!("Verifier is running. Press Ctrl+C to stop.");
    let finished = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            None
        }
        finished = &mut server => Some(finished),
    };

    match finished {
        // Server exited on its own: bind failure or I/O error.
        Some(result) => {
            if let Err(e) = result? {
                error!(error = %e, "Verifier stopped unexpectedly");
                return Err(e);
            }
        }
        None => {
            runtime.shutdown();
            server.await??;
        }
    }

    info!("Shutdown complete");
    Ok(())
}
