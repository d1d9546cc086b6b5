//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the single relay handler
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener and run until shutdown
//! - Read the inbound body, hand it to the relay core, write the outcome

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{Method, Request},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response;
use crate::observability::metrics;
use crate::relay::{decode, RelayExecutor};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub executor: RelayExecutor,
    pub max_body_bytes: usize,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with a default outbound client.
    pub fn new(config: RelayConfig) -> Self {
        Self::with_executor(config, RelayExecutor::default())
    }

    /// Create a new HTTP server relaying through `executor`.
    pub fn with_executor(config: RelayConfig, executor: RelayExecutor) -> Self {
        let state = AppState {
            executor,
            max_body_bytes: config.limits.max_body_bytes,
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Every path and method reaches the same handler.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(propagate_request_id_layer()),
            )
    }

    /// The configured router, for serving or driving directly in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Relay handler.
/// Accepts POST only, decodes the descriptor and performs the outbound call.
async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request.request_id().to_string();
    let method = request.method().clone();

    if method != Method::POST {
        tracing::warn!(request_id = %request_id, method = %method, "Rejected non-POST request");
        metrics::record_error("method");
        let response = response::method_rejected();
        metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
        return response;
    }

    let raw = match to_bytes(request.into_body(), state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Failed to read inbound body");
            metrics::record_error("inbound_read");
            let response = response::inbound_read_failed(&e);
            metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
            return response;
        }
    };

    let outcome = match decode(&raw) {
        Ok(descriptor) => {
            tracing::debug!(
                request_id = %request_id,
                method = %descriptor.method,
                url = %descriptor.url,
                "Relaying call"
            );
            state.executor.execute(descriptor).await
        }
        Err(e) => Err(e),
    };

    let response = match outcome {
        Ok(result) => {
            tracing::info!(
                request_id = %request_id,
                status = %result.status,
                body_bytes = result.body.as_ref().map_or(0, |b| b.len()),
                "Relay completed"
            );
            result.into_response()
        }
        Err(err) => {
            tracing::error!(
                request_id = %request_id,
                stage = err.stage(),
                error = %err,
                "Relay failed"
            );
            metrics::record_error(err.stage());
            err.into_response()
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
    response
}
