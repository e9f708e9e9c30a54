//! Metrics collection and exposition.
//!
//! # Metrics
//! - `microversion_negotiations_total` (counter): negotiations by service and
//!   outcome (`negotiated`, `malformed`, `unsupported`, `invalid_source`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const NEGOTIATIONS_TOTAL: &str = "microversion_negotiations_total";

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one negotiation outcome.
pub fn record_negotiation(service_type: &str, outcome: &'static str) {
    metrics::counter!(
        NEGOTIATIONS_TOTAL,
        "service" => service_type.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}
