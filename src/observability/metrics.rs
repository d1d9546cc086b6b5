//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relayed requests by method, status
//! - `relay_request_duration_seconds` (histogram): end-to-end relay latency
//! - `relay_errors_total` (counter): aborted relays by stage
//! - `relay_headers_skipped_total` (counter): header entries with an unsupported shape
//! - `relay_response_read_failures_total` (counter): outbound bodies that could not be read
//!
//! Recording is a no-op until [`init_metrics`] installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and serve `/metrics` on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed inbound request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "relay_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("relay_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record a relay aborted at `stage`.
pub fn record_error(stage: &'static str) {
    metrics::counter!("relay_errors_total", "stage" => stage).increment(1);
}

/// Record a header entry skipped for its value shape.
pub fn record_header_skipped() {
    metrics::counter!("relay_headers_skipped_total").increment(1);
}

/// Record an outbound body that could not be read.
pub fn record_response_read_failure() {
    metrics::counter!("relay_response_read_failures_total").increment(1);
}
