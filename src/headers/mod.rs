//! Header normalization subsystem.
//!
//! # Data Flow
//! ```text
//! raw input (map / (name, value) pairs / CGI-style environ / http::HeaderMap)
//!     → source.rs (tag the shape once, at the boundary)
//!     → folded.rs (one lower-case, single-valued mapping)
//!     → FoldedHeaders::get (exact name, then `http_` environ fallback)
//! ```
//!
//! # Design Decisions
//! - The shape is an explicit enum, not probed at runtime
//! - Folding happens exactly once; downstream code never re-normalizes
//! - Repeated pair-style headers are joined with `,` in arrival order

pub mod folded;
pub mod source;

pub use folded::{fold_headers, FoldedHeaders};
pub use source::{headers_from_environ, HeaderSource};
