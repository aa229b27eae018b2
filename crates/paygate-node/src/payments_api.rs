//! Payment API endpoints.
//!
//! All routes are protected: the authorization gate runs before every
//! handler via [`CurrentUser`].
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/api/v1/payments` | Open a payment order at the gateway |
//! | POST | `/api/v1/payments/verify` | Verify a completed payment |
//! | GET | `/api/v1/payments` | List the caller's orders |
//! | GET | `/api/v1/payments/{order_id}` | Get one order |

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use paygate_payments::{GatewayOrder, PaymentError, PaymentOrder};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::auth_api::CurrentUser;

/// Creates the payment API routes.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/payments", post(create_payment).get(list_payments))
        .route("/api/v1/payments/verify", post(verify_payment))
        .route("/api/v1/payments/{order_id}", get(get_payment))
}

// ==================== Error Handling ====================

/// Wrapper mapping payment errors onto HTTP responses.
struct PaymentApiError(PaymentError);

impl From<PaymentError> for PaymentApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "payment request failed");
        }

        (
            status,
            Json(ErrorBody {
                message: self.0.public_message(),
            }),
        )
            .into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

// ==================== Request/Response Types ====================

/// Request to open a payment order.
#[derive(Debug, Deserialize)]
struct CreatePaymentRequest {
    /// Amount in minor currency units.
    amount: u64,
    /// ISO currency code.
    #[serde(default = "default_currency")]
    currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Request to verify a completed payment.
#[derive(Debug, Deserialize)]
struct VerifyPaymentRequest {
    order_id: String,
    payment_id: String,
    signature: String,
}

#[derive(Debug, Serialize)]
struct VerifyPaymentResponse {
    status: &'static str,
}

// ==================== Handlers ====================

/// Opens a payment order for the authenticated user.
async fn create_payment(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Json(body): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<GatewayOrder>), PaymentApiError> {
    let order = state
        .payments
        .create_payment(&identity.subject, body.amount, &body.currency)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Verifies a completed payment against its gateway signature.
async fn verify_payment(
    State(state): State<AppState>,
    CurrentUser(_identity): CurrentUser,
    Json(body): Json<VerifyPaymentRequest>,
) -> Result<Json<VerifyPaymentResponse>, PaymentApiError> {
    state
        .payments
        .verify_payment(&body.order_id, &body.payment_id, &body.signature)
        .await?;
    Ok(Json(VerifyPaymentResponse {
        status: "payment verified",
    }))
}

/// Lists the authenticated user's orders, newest first.
async fn list_payments(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<Vec<PaymentOrder>>, PaymentApiError> {
    let orders = state.payments.list_payments(&identity.subject).await?;
    Ok(Json(orders))
}

/// Gets one order by gateway order ID.
async fn get_payment(
    State(state): State<AppState>,
    CurrentUser(_identity): CurrentUser,
    Path(order_id): Path<String>,
) -> Result<Json<PaymentOrder>, PaymentApiError> {
    let order = state.payments.get_payment(&order_id).await?;
    Ok(Json(order))
}

// ==================== Tests ====================
