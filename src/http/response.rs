//! Error responses for failed negotiation.

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::MicroversionError;
use crate::negotiation::{Negotiator, STANDARD_HEADER};
use crate::version::Version;

#[derive(Debug, Serialize)]
struct NegotiationErrorBody<'a> {
    error: String,
    service_type: &'a str,
    min_version: Option<Version>,
    max_version: Option<Version>,
}

/// Build the 400/406 response for a negotiation failure.
pub fn negotiation_error_response(negotiator: &Negotiator, err: &MicroversionError) -> Response {
    let body = NegotiationErrorBody {
        error: format!("Invalid microversion: {err}"),
        service_type: negotiator.service_type(),
        min_version: negotiator.min_version(),
        max_version: negotiator.max_version(),
    };
    let mut response = (err.status_code(), Json(body)).into_response();
    response
        .headers_mut()
        .append(header::VARY, HeaderValue::from_static(STANDARD_HEADER));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_unsupported_body() {
        let negotiator = Negotiator::new("cats", ["1.0", "1.2"]).unwrap();
        let err = MicroversionError::UnsupportedVersion {
            version: "1.1".into(),
            min: "1.0".into(),
            max: "1.2".into(),
        };

        let response = negotiation_error_response(&negotiator, &err);
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
        assert_eq!(response.headers()["vary"], "openstack-api-version");

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["service_type"], "cats");
        assert_eq!(json["min_version"], "1.0");
        assert_eq!(json["max_version"], "1.2");
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid microversion: version 1.1 is not supported"));
    }
}
