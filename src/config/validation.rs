//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Every supported version parses and is written canonically
//! - Versions are strictly ascending, so first = min and last = max
//! - Addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MicroversionConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::MicroversionConfig;
use crate::version::{parse_version_string, Version};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("service_type must not be empty")]
    EmptyServiceType,

    #[error("service_type {0:?} must not contain whitespace or commas")]
    InvalidServiceType(String),

    #[error("at least one supported version is required")]
    NoVersions,

    #[error("version {literal:?} is invalid: {reason}")]
    InvalidVersion { literal: String, reason: String },

    #[error("version {literal:?} is not canonical, write it as {canonical:?}")]
    NonCanonicalVersion { literal: String, canonical: String },

    #[error("version {current} must be greater than the preceding {previous}")]
    VersionOrder { previous: String, current: String },

    #[error("legacy header {0:?} is not a valid header name")]
    InvalidLegacyHeader(String),

    #[error("{field} {value:?} is not a socket address")]
    InvalidAddress { field: &'static str, value: String },
}

pub fn validate_config(config: &MicroversionConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let service = &config.service;

    if service.service_type.is_empty() {
        errors.push(ValidationError::EmptyServiceType);
    } else if service
        .service_type
        .chars()
        .any(|c| c.is_whitespace() || c == ',')
    {
        errors.push(ValidationError::InvalidServiceType(service.service_type.clone()));
    }

    if service.versions.is_empty() {
        errors.push(ValidationError::NoVersions);
    }

    let mut previous: Option<Version> = None;
    for literal in &service.versions {
        let version = match parse_version_string(literal) {
            Ok(v) => v,
            Err(e) => {
                errors.push(ValidationError::InvalidVersion {
                    literal: literal.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let canonical = version.to_string();
        if canonical != *literal {
            errors.push(ValidationError::NonCanonicalVersion {
                literal: literal.clone(),
                canonical,
            });
        }

        if let Some(prev) = previous {
            if version <= prev {
                errors.push(ValidationError::VersionOrder {
                    previous: prev.to_string(),
                    current: version.to_string(),
                });
            }
        }
        previous = Some(version);
    }

    for header in &service.legacy_headers {
        if header.is_empty() || header.chars().any(|c| c.is_whitespace() || c == ':') {
            errors.push(ValidationError::InvalidLegacyHeader(header.clone()));
        }
    }

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
