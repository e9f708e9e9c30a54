//! HTTP adapter subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → middleware.rs (negotiate from request headers)
//!         ├─ failure → response.rs (400 / 406 JSON body)
//!         └─ success → BoundedVersion in request extensions
//!     → handler (reads it through the `Microversion` extractor)
//!     → middleware.rs (echo `openstack-api-version`, add `vary`)
//!     → Send to client
//! ```

pub mod extract;
pub mod middleware;
pub mod response;
pub mod server;

pub use extract::Microversion;
pub use middleware::{microversion_middleware, MicroversionState};
pub use server::MicroversionServer;
