//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the version-echo handler
//! - Wire up middleware (tracing, microversion negotiation)
//! - Bind server to listener
//! - Apply reloaded configuration to the live negotiation policy

use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::trace::TraceLayer;

use crate::config::MicroversionConfig;
use crate::error::MicroversionError;
use crate::http::extract::Microversion;
use crate::http::middleware::{microversion_middleware, MicroversionState};
use crate::lifecycle::shutdown_signal;
use crate::negotiation::Negotiator;
use crate::version::Version;

/// HTTP server exposing the negotiated microversion.
pub struct MicroversionServer {
    router: Router,
    state: MicroversionState,
    config: MicroversionConfig,
}

impl MicroversionServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: MicroversionConfig) -> Result<Self, MicroversionError> {
        let state = MicroversionState::new(Negotiator::from_config(&config.service)?);
        let router = Self::build_router(state.clone());
        Ok(Self {
            router,
            state,
            config,
        })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: MicroversionState) -> Router {
        Router::new()
            .route("/", get(show_version))
            .fallback(not_found)
            .layer(from_fn_with_state(state.clone(), microversion_middleware))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` fires or Ctrl+C is received.
    ///
    /// Configurations arriving on `config_updates` replace the negotiation
    /// policy; the listener address is not rebound.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<MicroversionConfig>,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            service_type = %self.config.service.service_type,
            "HTTP server starting"
        );

        let state = self.state.clone();
        let reloader = tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                match Negotiator::from_config(&config.service) {
                    Ok(negotiator) => state.replace(negotiator),
                    Err(e) => {
                        tracing::error!(error = %e, "Rejected reloaded service configuration");
                    }
                }
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        reloader.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn state(&self) -> &MicroversionState {
        &self.state
    }

    pub fn config(&self) -> &MicroversionConfig {
        &self.config
    }
}

#[derive(Debug, Serialize)]
struct VersionReport {
    service_type: String,
    version: Version,
    min_version: Version,
    max_version: Version,
    latest: bool,
}

async fn show_version(
    State(state): State<MicroversionState>,
    Microversion(version): Microversion,
) -> Json<VersionReport> {
    Json(VersionReport {
        service_type: state.negotiator().service_type().to_string(),
        version: version.version(),
        min_version: version.min_version(),
        max_version: version.max_version(),
        latest: version.is_latest(),
    })
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn server() -> MicroversionServer {
        MicroversionServer::new(MicroversionConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_echoes_version() {
        let response = server()
            .router
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("openstack-api-version", "cats 1.1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_type": "cats",
                "version": "1.1",
                "min_version": "1.0",
                "max_version": "1.2",
                "latest": false,
            })
        );
    }

    #[tokio::test]
    async fn test_not_found_carries_version_headers() {
        let response = server()
            .router
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["openstack-api-version"], "cats 1.0");
        assert_eq!(response.headers()["vary"], "openstack-api-version");
    }

    #[test]
    fn test_rejects_empty_versions() {
        let mut config = MicroversionConfig::default();
        config.service.versions.clear();
        assert_eq!(
            MicroversionServer::new(config).err(),
            Some(MicroversionError::EmptyVersionList)
        );
    }
}
