//! Health check endpoints.
//!
//! - **Liveness**: is the process running?
//! - **Readiness**: can the service reach its store collaborator?
//! - **`/health`**: combined status in the shape API consumers poll.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::api::AppState;

/// Combined health response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    /// Overall status: `healthy` or `unhealthy`.
    status: &'static str,
    /// Credential store reachability: `connected` or `disconnected`.
    database: &'static str,
    /// Service version.
    version: &'static str,
}

/// Creates the health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
}

/// Combined health check, probing the credential store.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.credentials.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: "connected",
                version: env!("CARGO_PKG_VERSION"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "credential store probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    database: "disconnected",
                    version: env!("CARGO_PKG_VERSION"),
                }),
            )
        }
    }
}

/// Liveness probe: the process is up.
async fn liveness() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "alive" }))
}

/// Readiness probe: the store collaborator is reachable.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.credentials.ping().await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "ready": true }))),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "ready": false })),
        ),
    }
}
