//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MicroversionConfig (validated, immutable)
//!     → Negotiator built from the [service] table
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → Negotiator built as a dry run, else the change is dropped
//!     → atomic swap of the active Negotiator
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, MicroversionConfig, ObservabilityConfig, ServiceConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::{reload_config, ConfigWatcher, ReloadError};
