//! Error taxonomy for microversion negotiation.
//!
//! "Not found" during header lookup is never an error here; lookups return
//! `Option` and only genuinely invalid input reaches the caller.

use std::num::ParseIntError;

use axum::http::StatusCode;
use thiserror::Error;

/// Why a version literal failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCause {
    /// The literal did not split into exactly `major.minor`.
    #[error("expected exactly two dot-separated components")]
    ComponentCount,

    /// A component was empty or contained something other than ASCII digits.
    #[error("component {component:?} is not a base-10 integer")]
    NotDecimal { component: String },

    /// A component was all digits but does not fit in a `u32`.
    #[error("component out of range: {0}")]
    Overflow(#[from] ParseIntError),
}

/// Errors surfaced by negotiation to its host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MicroversionError {
    /// The header collection could not be interpreted as any known shape.
    #[error("invalid header source: {reason}")]
    InvalidHeaderSource { reason: String },

    /// A version literal failed strict `major.minor` parsing.
    #[error("malformed version {input:?}: {cause}")]
    MalformedVersion {
        input: String,
        #[source]
        cause: ParseCause,
    },

    /// The version parsed but is not in the supported list.
    #[error("version {version} is not supported (min {min}, max {max})")]
    UnsupportedVersion {
        version: String,
        min: String,
        max: String,
    },

    /// Negotiation was attempted against an empty supported-version list.
    #[error("supported version list is empty")]
    EmptyVersionList,
}

impl MicroversionError {
    pub(crate) fn malformed(input: impl Into<String>, cause: impl Into<ParseCause>) -> Self {
        Self::MalformedVersion {
            input: input.into(),
            cause: cause.into(),
        }
    }

    /// HTTP status a host should answer with for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidHeaderSource { .. } | Self::MalformedVersion { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::UnsupportedVersion { .. } => StatusCode::NOT_ACCEPTABLE,
            Self::EmptyVersionList => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidHeaderSource { .. } => "invalid_source",
            Self::MalformedVersion { .. } => "malformed",
            Self::UnsupportedVersion { .. } => "unsupported",
            Self::EmptyVersionList => "empty_version_list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let malformed = MicroversionError::malformed("1.a", ParseCause::ComponentCount);
        assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);

        let unsupported = MicroversionError::UnsupportedVersion {
            version: "1.5".into(),
            min: "1.1".into(),
            max: "2.4".into(),
        };
        assert_eq!(unsupported.status_code(), StatusCode::NOT_ACCEPTABLE);
        assert_eq!(unsupported.kind(), "unsupported");

        let source = MicroversionError::InvalidHeaderSource { reason: "nope".into() };
        assert_eq!(source.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_keeps_cause() {
        let err = MicroversionError::malformed("hello", ParseCause::ComponentCount);
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("expected exactly two dot-separated components"));
        assert!(err.to_string().contains("\"hello\""));
    }
}
