//! Prometheus metrics for the review verifier.
//!
//! All metrics follow the naming convention: `rs_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};
use std::time::Instant;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Verifications by outcome (valid, invalid, unsigned, error)
    pub static ref VERIFICATIONS: CounterVec = CounterVec::new(
        Opts::new("rs_verifier_verifications_total", "Review signature verifications"),
        &["outcome"]
    ).expect("metric creation failed");

    /// Verifications that only matched the trailing-newline message
    pub static ref NEWLINE_FALLBACKS: Counter = Counter::new(
        "rs_verifier_newline_fallbacks_total",
        "Signatures that matched the canonical message plus a trailing newline"
    ).expect("metric creation failed");

    /// Time spent recovering and comparing signers
    pub static ref VERIFICATION_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "rs_verifier_verification_duration_seconds",
            "Time spent verifying one review signature"
        ).buckets(exponential_buckets(0.0001, 2.0, 14).expect("valid buckets"))
    ).expect("metric creation failed");

    /// HTTP requests by method and status
    pub static ref HTTP_REQUESTS: CounterVec = CounterVec::new(
        Opts::new("rs_gateway_http_requests_total", "HTTP requests handled by the gateway"),
        &["method", "status"]
    ).expect("metric creation failed");
}

/// Outcome label for [`VERIFICATIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationLabel {
    Valid,
    Invalid,
    Unsigned,
    Error,
}

impl VerificationLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationLabel::Valid => "valid",
            VerificationLabel::Invalid => "invalid",
            VerificationLabel::Unsigned => "unsigned",
            VerificationLabel::Error => "error",
        }
    }
}

/// Count one verification outcome.
///
/// Durations go through [`HistogramTimer`] on [`VERIFICATION_DURATION`].
pub fn record_verification(label: VerificationLabel) {
    VERIFICATIONS.with_label_values(&[label.as_str()]).inc();
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(VERIFICATIONS.clone()),
        Box::new(NEWLINE_FALLBACKS.clone()),
        Box::new(VERIFICATION_DURATION.clone()),
        Box::new(HTTP_REQUESTS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}
