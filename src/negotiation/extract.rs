//! Turning headers into a validated, bounded version.

use crate::error::{MicroversionError, ParseCause};
use crate::headers::{fold_headers, FoldedHeaders, HeaderSource};
use crate::negotiation::{check_legacy_headers, check_standard_header};
use crate::version::{parse_version_string, BoundedVersion};

/// Token that resolves to the newest supported version.
pub const LATEST: &str = "latest";

/// The version token the caller asked for, if any.
///
/// Returns the raw token (`"2.1"`, `"latest"`, or whatever was sent) without
/// defaulting or validation.
pub fn get_version<S: AsRef<str>>(
    headers: &HeaderSource,
    service_type: &str,
    legacy_headers: &[S],
) -> Option<String> {
    requested_version(&fold_headers(headers), service_type, legacy_headers)
}

/// Negotiate a version for `service_type` against the ordered `versions`.
pub fn extract_version<S: AsRef<str>>(
    headers: &HeaderSource,
    service_type: &str,
    versions: &[S],
) -> Result<BoundedVersion, MicroversionError> {
    extract_version_with_legacy::<S, &str>(headers, service_type, versions, &[])
}

/// Like [`extract_version`], also probing `legacy_headers` when the standard
/// header has nothing for this service.
pub fn extract_version_with_legacy<S: AsRef<str>, L: AsRef<str>>(
    headers: &HeaderSource,
    service_type: &str,
    versions: &[S],
    legacy_headers: &[L],
) -> Result<BoundedVersion, MicroversionError> {
    let folded = fold_headers(headers);
    let requested = requested_version(&folded, service_type, legacy_headers);
    resolve_version(requested.as_deref(), versions)
}

pub(crate) fn requested_version<S: AsRef<str>>(
    headers: &FoldedHeaders,
    service_type: &str,
    legacy_headers: &[S],
) -> Option<String> {
    check_standard_header(headers, service_type)
        .or_else(|| check_legacy_headers(headers, legacy_headers))
}

/// Default, resolve `latest`, parse, bound and validate a requested token.
pub(crate) fn resolve_version<S: AsRef<str>>(
    requested: Option<&str>,
    versions: &[S],
) -> Result<BoundedVersion, MicroversionError> {
    let min_literal = versions
        .first()
        .ok_or(MicroversionError::EmptyVersionList)?
        .as_ref();
    let max_literal = versions
        .last()
        .ok_or(MicroversionError::EmptyVersionList)?
        .as_ref();

    let literal = match requested {
        None => min_literal,
        Some(LATEST) => max_literal,
        Some(token) => token,
    };

    let version = match parse_version_string(literal) {
        Ok(version) => version,
        // All digits but wider than u32: well formed, yet no list can hold it.
        Err(MicroversionError::MalformedVersion {
            cause: ParseCause::Overflow(_),
            ..
        }) => {
            return Err(MicroversionError::UnsupportedVersion {
                version: literal.trim().to_string(),
                min: min_literal.to_string(),
                max: max_literal.to_string(),
            });
        }
        Err(e) => return Err(e),
    };
    let bounded = BoundedVersion::new(
        version,
        parse_version_string(min_literal)?,
        parse_version_string(max_literal)?,
    );

    let canonical = version.to_string();
    if !versions.iter().any(|candidate| candidate.as_ref() == canonical) {
        return Err(MicroversionError::UnsupportedVersion {
            version: canonical,
            min: min_literal.to_string(),
            max: max_literal.to_string(),
        });
    }

    Ok(bounded)
}
