//! Microversion negotiation middleware.
//!
//! # Responsibilities
//! - Negotiate the request's microversion before the handler runs
//! - Reject bad requests (400) and unavailable versions (406)
//! - Attach the negotiated version to request extensions
//! - Echo the negotiated version on every downstream response
//!
//! # Design Decisions
//! - The active policy sits behind `ArcSwap` so a config reload can
//!   disable or add versions without a restart
//! - Each request loads one snapshot of the policy and uses it throughout

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use crate::http::response::negotiation_error_response;
use crate::negotiation::{Negotiator, STANDARD_HEADER};
use crate::observability::metrics;
use crate::version::BoundedVersion;

/// State shared by the middleware across requests.
#[derive(Clone)]
pub struct MicroversionState {
    negotiator: Arc<ArcSwap<Negotiator>>,
}

impl MicroversionState {
    pub fn new(negotiator: Negotiator) -> Self {
        Self {
            negotiator: Arc::new(ArcSwap::from_pointee(negotiator)),
        }
    }

    /// Snapshot of the active policy.
    pub fn negotiator(&self) -> Arc<Negotiator> {
        self.negotiator.load_full()
    }

    /// Swap in a new policy; in-flight requests keep their snapshot.
    pub fn replace(&self, negotiator: Negotiator) {
        tracing::info!(
            service_type = %negotiator.service_type(),
            versions = ?negotiator.versions(),
            "Microversion policy replaced"
        );
        self.negotiator.store(Arc::new(negotiator));
    }
}

pub async fn microversion_middleware(
    State(state): State<MicroversionState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let negotiator = state.negotiator();
    let service_type = negotiator.service_type();

    let version = match negotiator.negotiate_headers(req.headers()) {
        Ok(version) => version,
        Err(e) => {
            metrics::record_negotiation(service_type, e.kind());
            return negotiation_error_response(&negotiator, &e);
        }
    };
    metrics::record_negotiation(service_type, "negotiated");

    req.extensions_mut().insert(version);
    let mut response = next.run(req).await;
    add_microversion_headers(&mut response, service_type, &version);
    response
}

/// Add `openstack-api-version: <service> <version>` and `vary: openstack-api-version`.
pub fn add_microversion_headers(response: &mut Response, service_type: &str, version: &BoundedVersion) {
    let headers = response.headers_mut();
    match HeaderValue::from_str(&format!("{service_type} {version}")) {
        Ok(value) => {
            headers.append(HeaderName::from_static(STANDARD_HEADER), value);
        }
        Err(e) => {
            tracing::warn!(service_type = %service_type, error = %e, "Cannot echo microversion header");
        }
    }
    headers.append(header::VARY, HeaderValue::from_static(STANDARD_HEADER));
}
