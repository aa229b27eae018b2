//! Router assembly and shared application state.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use paygate_auth::{AccountService, CredentialStore, TokenCodec};
use paygate_payments::PaymentService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{auth_api, health, payments_api};

/// Application state shared across handlers.
///
/// Everything here is immutable after startup or internally synchronized;
/// handlers clone the state freely.
#[derive(Clone)]
pub struct AppState {
    /// Signup/login orchestration.
    pub accounts: AccountService,
    /// Payment order flow.
    pub payments: PaymentService,
    /// Token codec used by the authorization gate.
    pub codec: TokenCodec,
    /// Credential store handle, used by health probes.
    pub credentials: Arc<dyn CredentialStore>,
}

/// Creates the API router.
///
/// CORS is wide open, as the service expects to sit behind a fronting
/// proxy that narrows origins for deployment.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(health::health_routes())
        .merge(auth_api::auth_routes())
        .merge(payments_api::payment_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Root welcome endpoint.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the Paygate API" }))
}
