//! Microversion negotiation.
//!
//! # Data Flow
//! ```text
//! HeaderSource
//!     → headers::fold_headers
//!     → standard.rs (`openstack-api-version: <service> <version>, ...`)
//!     → legacy.rs (caller-supplied fallback headers, first present wins)
//!     → extract.rs (default to min, resolve "latest", parse, bound, validate)
//!     → BoundedVersion | MicroversionError
//! ```
//!
//! # Design Decisions
//! - Absence is `None` at every lookup stage; only bad input is an error
//! - Later entries in the standard header override earlier ones
//! - A present legacy header stops the search even if its value is junk
//! - Membership in the supported list is the only validity gate

pub mod extract;
pub mod legacy;
pub mod negotiator;
pub mod standard;

pub use extract::{extract_version, extract_version_with_legacy, get_version, LATEST};
pub use legacy::check_legacy_headers;
pub use negotiator::Negotiator;
pub use standard::{check_standard_header, STANDARD_HEADER};
