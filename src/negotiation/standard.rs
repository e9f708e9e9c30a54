//! The combined `openstack-api-version` header.

use crate::headers::FoldedHeaders;

/// Name of the multi-service negotiation header.
pub const STANDARD_HEADER: &str = "openstack-api-version";

/// Find the version token requested for `service_type`.
///
/// Entries are `<service> <version>` joined by `,`; the last entry for a
/// service wins. Entries without a version token are skipped.
pub fn check_standard_header(headers: &FoldedHeaders, service_type: &str) -> Option<String> {
    let header = headers.get(STANDARD_HEADER)?;
    let wanted = service_type.to_lowercase();
    header.split(',').rev().find_map(|entry| {
        let (service, version) = entry.trim().split_once(char::is_whitespace)?;
        (service.to_lowercase() == wanted).then(|| version.trim().to_string())
    })
}
