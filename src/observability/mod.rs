//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Negotiation and the server produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (negotiation outcome counters)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level
//! - Metrics are cheap (atomic increments) and a no-op until a recorder is installed

pub mod logging;
pub mod metrics;
