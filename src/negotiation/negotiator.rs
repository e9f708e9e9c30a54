//! A reusable negotiation policy for one service.

use axum::http::HeaderMap;

use crate::config::ServiceConfig;
use crate::error::MicroversionError;
use crate::headers::{fold_headers, HeaderSource};
use crate::negotiation::extract::{requested_version, resolve_version};
use crate::version::{parse_version_string, BoundedVersion, Version};

/// Service type, supported versions and legacy headers, checked once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiator {
    service_type: String,
    versions: Vec<String>,
    legacy_headers: Vec<String>,
}

impl Negotiator {
    /// Create a negotiator. `versions` must be non-empty, earliest first,
    /// and every entry must parse.
    pub fn new<I, S>(service_type: impl Into<String>, versions: I) -> Result<Self, MicroversionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let versions: Vec<String> = versions.into_iter().map(Into::into).collect();
        if versions.is_empty() {
            return Err(MicroversionError::EmptyVersionList);
        }
        for literal in &versions {
            parse_version_string(literal)?;
        }
        Ok(Self {
            service_type: service_type.into(),
            versions,
            legacy_headers: Vec::new(),
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, MicroversionError> {
        Ok(Self::new(config.service_type.clone(), config.versions.clone())?
            .with_legacy_headers(config.legacy_headers.clone()))
    }

    /// Headers probed, in order, when the standard header names no version.
    pub fn with_legacy_headers<I, S>(mut self, legacy_headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legacy_headers = legacy_headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn legacy_headers(&self) -> &[String] {
        &self.legacy_headers
    }

    /// Lowest supported version (the default).
    pub fn min_version(&self) -> Option<Version> {
        self.versions.first().and_then(|v| v.parse().ok())
    }

    /// Highest supported version (what `latest` resolves to).
    pub fn max_version(&self) -> Option<Version> {
        self.versions.last().and_then(|v| v.parse().ok())
    }

    pub fn negotiate(&self, headers: &HeaderSource) -> Result<BoundedVersion, MicroversionError> {
        let folded = fold_headers(headers);
        let requested = requested_version(&folded, &self.service_type, &self.legacy_headers);

        match resolve_version(requested.as_deref(), &self.versions) {
            Ok(version) => {
                tracing::debug!(
                    service_type = %self.service_type,
                    requested = ?requested,
                    version = %version,
                    "Microversion negotiated"
                );
                Ok(version)
            }
            Err(e) => {
                tracing::warn!(
                    service_type = %self.service_type,
                    requested = ?requested,
                    error = %e,
                    "Microversion rejected"
                );
                Err(e)
            }
        }
    }

    pub fn negotiate_headers(&self, headers: &HeaderMap) -> Result<BoundedVersion, MicroversionError> {
        self.negotiate(&HeaderSource::from(headers))
    }
}
