//! Negotiation scenarios through the public API.

use microversion_parse::{
    extract_version, extract_version_with_legacy, fold_headers, get_version, BoundedVersion,
    HeaderSource, MicroversionError, Version,
};

const VERSIONS: &[&str] = &["1.1", "1.2", "1.3", "1.4", "2.1", "2.2", "2.3", "2.4"];

fn service_headers() -> HeaderSource {
    HeaderSource::pairs([
        ("OpenStack-API-Version", "service1 1.2"),
        ("OpenStack-API-Version", "service2 1.5"),
        ("OpenStack-API-Version", "service3 latest"),
        ("OpenStack-API-Version", "service4 2.5"),
    ])
}

fn extract(service: &str) -> Result<BoundedVersion, MicroversionError> {
    extract_version(&service_headers(), service, VERSIONS)
}

#[test]
fn test_simple_extract() {
    assert_eq!(extract("service1").unwrap().version(), Version::new(1, 2));
}

#[test]
fn test_default_min() {
    let version = extract("notlisted").unwrap();
    assert_eq!(version.version(), Version::new(1, 1));
    assert!(version.matches(None, None));
}

#[test]
fn test_latest() {
    assert_eq!(extract("service3").unwrap().version(), Version::new(2, 4));
}

#[test]
fn test_version_disabled() {
    assert!(matches!(
        extract("service2"),
        Err(MicroversionError::UnsupportedVersion { .. })
    ));
}

#[test]
fn test_version_out_of_range() {
    assert!(matches!(
        extract("service4"),
        Err(MicroversionError::UnsupportedVersion { .. })
    ));
}

#[test]
fn test_bounds_attached() {
    let version = extract("service1").unwrap();
    assert_eq!(version.min_version(), Version::new(1, 1));
    assert_eq!(version.max_version(), Version::new(2, 4));
    assert!(version.matches(Some(Version::new(1, 2)), None));
    assert!(!version.matches(Some(Version::new(1, 3)), None));
}

#[test]
fn test_unfolded_service() {
    let headers = HeaderSource::pairs([
        ("header-one", "alpha"),
        ("openstack-api-version", "compute 1.0"),
        ("openstack-api-version", "compute 2.0"),
        ("openstack-api-version", "3.0"),
    ]);
    assert_eq!(
        get_version::<&str>(&headers, "compute", &[]).as_deref(),
        Some("2.0")
    );
}

#[test]
fn test_unfolded_in_name() {
    let headers = HeaderSource::pairs([
        ("header-one", "alpha"),
        ("x-openstack-nova-api-version", "1.0"),
        ("x-openstack-nova-api-version", "2.0"),
        ("openstack-telemetry-api-version", "3.0"),
    ]);
    let version = get_version(&headers, "compute", &["x-openstack-nova-api-version"]);
    assert_eq!(version.as_deref(), Some("2.0"));
}

#[test]
fn test_capitalized_headers() {
    let headers = HeaderSource::mapping([("X-Openstack-Ironic-Api-Version", "123.456")]);
    let version = get_version(&headers, "ironic", &["X-Openstack-Ironic-Api-Version"]);
    assert_eq!(version.as_deref(), Some("123.456"));
}

#[test]
fn test_get_version_from_environ() {
    let headers = HeaderSource::environ([
        ("PATH_INFO", "/foo/bar"),
        ("HTTP_OPENSTACK_API_VERSION", "placement 2.1"),
        ("HTTP_CONTENT_TYPE", "application/json"),
    ]);
    assert_eq!(
        get_version::<&str>(&headers, "placement", &[]).as_deref(),
        Some("2.1")
    );
}

#[test]
fn test_get_version_from_environ_legacy() {
    let headers = HeaderSource::environ([
        ("PATH_INFO", "/foo/bar"),
        ("HTTP_X_OPENSTACK_PLACEMENT_API_VERSION", "2.1"),
        ("HTTP_CONTENT_TYPE", "application/json"),
    ]);
    let version = get_version(&headers, "placement", &["x-openstack-placement-api-version"]);
    assert_eq!(version.as_deref(), Some("2.1"));
}

#[test]
fn test_environ_headers_fold_with_prefix() {
    let folded = fold_headers(&HeaderSource::environ([
        ("HTTP_HEADER_ONE", "alpha"),
        ("HTTP_HEADER_TWO", "beta"),
        ("HTTP_HEADER_THREE", "gamma"),
    ]));
    assert_eq!(folded.len(), 3);
    assert_eq!(folded.get("header-three"), Some("gamma"));
}

#[test]
fn test_legacy_only_when_standard_absent() {
    let headers = HeaderSource::mapping([
        ("openstack-api-version", "compute 2.2"),
        ("x-openstack-nova-api-version", "2.3"),
    ]);
    let version = extract_version_with_legacy(
        &headers,
        "compute",
        &["2.1", "2.2", "2.3"],
        &["x-openstack-nova-api-version"],
    )
    .unwrap();
    assert_eq!(version.version(), Version::new(2, 2));
}

#[test]
fn test_invalid_json_source() {
    let err = HeaderSource::from_json(&serde_json::json!("wow this is not a headers")).unwrap_err();
    assert!(matches!(err, MicroversionError::InvalidHeaderSource { .. }));
}
