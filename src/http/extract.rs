//! Handler-side access to the negotiated version.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

use crate::version::BoundedVersion;

/// Extracts the [`BoundedVersion`] placed by the microversion middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Microversion(pub BoundedVersion);

impl<S> FromRequestParts<S> for Microversion
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<BoundedVersion>()
            .copied()
            .map(Microversion)
            .ok_or((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Microversion middleware is not installed",
            ))
    }
}
