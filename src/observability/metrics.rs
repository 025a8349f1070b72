//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lookup_requests_total` (counter): lookups by outcome
//! - `lookup_request_duration_seconds` (histogram): latency by outcome
//! - `lookup_upstream_responses_total` (counter): upstream replies by status
//!
//! Recording is a no-op until an exporter is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished lookup.
pub fn record_lookup(outcome: &'static str, start_time: Instant) {
    counter!("lookup_requests_total", "outcome" => outcome).increment(1);
    histogram!("lookup_request_duration_seconds", "outcome" => outcome)
        .record(start_time.elapsed().as_secs_f64());
}

/// Record the status code of an upstream reply.
pub fn record_upstream_status(status: u16) {
    counter!("lookup_upstream_responses_total", "status" => status.to_string()).increment(1);
}
