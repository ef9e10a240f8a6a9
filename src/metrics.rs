//! Metrics for classification throughput and latency.
//!
//! Uses the `metrics` facade. The Prometheus recorder is installed once at
//! startup and rendered by the `/metrics` endpoint.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::classifier::Sentiment;
use crate::error::Result;

/// Classifications counter metric name.
pub const METRIC_CLASSIFICATIONS: &str = "sentiment_classifications_total";
/// Validation failures counter metric name.
pub const METRIC_VALIDATION_FAILURES: &str = "sentiment_validation_failures_total";
/// Classification latency metric name.
pub const METRIC_CLASSIFY_LATENCY: &str = "sentiment_classify_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup, after the recorder is installed.
pub fn init_metrics() {
    describe_counter!(
        METRIC_CLASSIFICATIONS,
        "Total number of texts classified, by label"
    );
    describe_counter!(
        METRIC_VALIDATION_FAILURES,
        "Total number of sentiment requests rejected by validation"
    );
    describe_histogram!(
        METRIC_CLASSIFY_LATENCY,
        "Time to classify a text in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder.
pub fn install_recorder() -> Result<PrometheusHandle> {
    Ok(PrometheusBuilder::new().install_recorder()?)
}

/// Handle to a recorder that is not installed globally.
///
/// Renders an empty exposition; used when no global recorder is wanted.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

/// Increment the classifications counter for a label.
pub fn inc_classifications(label: Sentiment) {
    counter!(METRIC_CLASSIFICATIONS, "label" => label.as_str()).increment(1);
}

/// Increment the validation failures counter.
pub fn inc_validation_failures() {
    counter!(METRIC_VALIDATION_FAILURES).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(self.metric_name).record(self.elapsed_ms());
    }
}

/// Create a latency timer for classification.
pub fn timer_classify() -> LatencyTimer {
    LatencyTimer::new(METRIC_CLASSIFY_LATENCY)
}
