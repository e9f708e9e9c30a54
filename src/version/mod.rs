//! Comparable microversion values.
//!
//! # Data Flow
//! ```text
//! "1.5" (literal)
//!     → parse.rs (strict major.minor parsing)
//!     → Version (immutable, ordered)
//!     → bounded.rs (attach the service's min/max)
//!     → BoundedVersion handed to request handlers
//! ```
//!
//! # Design Decisions
//! - Ordering is lexicographic on (major, minor), never string order
//! - A plain `Version` carries no bounds, so it matches no range implicitly
//! - Bounds are attached once, by negotiation, and never mutated

pub mod bounded;
pub mod comparable;
pub mod parse;

pub use bounded::BoundedVersion;
pub use comparable::Version;
pub use parse::parse_version_string;
