//! OpenStack-style API microversion negotiation.
//!
//! Given request headers, a service type and the ordered list of versions a
//! service supports, work out which single version the caller asked for,
//! check it is available, and hand back a comparable value for feature gating.
//!
//! ```
//! use microversion_parse::{extract_version, HeaderSource, Version};
//!
//! let headers = HeaderSource::pairs([("OpenStack-API-Version", "compute 2.2")]);
//! let version = extract_version(&headers, "compute", &["2.1", "2.2", "2.3"]).unwrap();
//!
//! assert_eq!(version.version(), Version::new(2, 2));
//! assert!(version >= Version::new(2, 2));
//! ```

// Core
pub mod error;
pub mod headers;
pub mod negotiation;
pub mod version;

// Host integration
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use error::{MicroversionError, ParseCause};
pub use headers::{fold_headers, headers_from_environ, FoldedHeaders, HeaderSource};
pub use negotiation::{
    check_legacy_headers, check_standard_header, extract_version, extract_version_with_legacy,
    get_version, Negotiator, LATEST, STANDARD_HEADER,
};
pub use version::{parse_version_string, BoundedVersion, Version};
