//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the microversion server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MicroversionConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// The service whose microversions are negotiated.
    pub service: ServiceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Negotiation policy for one service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service type as it appears in `openstack-api-version` (e.g., "compute").
    pub service_type: String,

    /// Supported versions, earliest first. The first is the default and the
    /// last is what `latest` means. Omit an entry to disable it.
    pub versions: Vec<String>,

    /// Older single-service headers, probed in order.
    pub legacy_headers: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_type: "cats".to_string(),
            versions: vec!["1.0".to_string(), "1.1".to_string(), "1.2".to_string()],
            legacy_headers: Vec::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
