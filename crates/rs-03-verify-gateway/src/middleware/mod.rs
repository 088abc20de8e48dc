//! Middleware stack for the verify gateway.
//!
//! Layer order: Request → Tracing → Preflight → CORS → Timeout → Body limit → Handler
//!
//! The timeout layer is only installed when a request timeout is configured.

pub mod cors;
pub mod preflight;
pub mod tracing;

pub use cors::create_cors_layer;
pub use preflight::preflight_no_content;
pub use tracing::TracingLayer;
