//! Single-service legacy headers such as `x-openstack-nova-api-version`.

use crate::headers::FoldedHeaders;

/// Probe `legacy_headers` in order and return the last `,`-segment of the
/// first one present.
pub fn check_legacy_headers<S: AsRef<str>>(
    headers: &FoldedHeaders,
    legacy_headers: &[S],
) -> Option<String> {
    legacy_headers.iter().find_map(|name| {
        let value = headers.get(&name.as_ref().to_lowercase())?;
        value.rsplit(',').next().map(|last| last.trim().to_string())
    })
}
