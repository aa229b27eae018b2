//! Authentication API endpoints.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/api/v1/auth/signup` | Register an account |
//! | POST | `/api/v1/auth/signin` | Authenticate and issue a token |
//! | GET | `/api/v1/auth/me` | Current account (protected) |
//! | GET | `/api/v1/users/profile` | Decoded token view (protected) |

use axum::{
    extract::{FromRequestParts, State},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use paygate_auth::{gate, AuthContext, AuthError, IssuedToken};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::AppState;

/// Creates the authentication API routes.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/signup", post(signup))
        .route("/api/v1/auth/signin", post(signin))
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/users/profile", get(profile))
}

// ==================== Error Handling ====================

/// Wrapper mapping core auth errors onto HTTP responses.
pub struct AuthApiError(pub AuthError);

impl From<AuthError> for AuthApiError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "auth request failed");
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

// ==================== Request Gate ====================

/// Extractor running the authorization gate before a protected handler.
///
/// Pulls the `Authorization` header, decodes and validates the bearer
/// token, and applies the active-user check. Rejections short-circuit the
/// request before the handler body runs.
pub struct CurrentUser(pub AuthContext);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let identity = gate::authorize(header, &state.codec)?;
        identity.require_active()?;
        Ok(Self(identity))
    }
}

// ==================== Request/Response Types ====================

/// Signup/signin request body.
#[derive(Debug, Deserialize, Validate)]
pub struct Credentials {
    /// Account email identifier.
    #[validate(email)]
    pub email: String,
    /// Plaintext password; hashed before it is stored, never logged.
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
struct SignupResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct UserView {
    email: String,
    id: String,
}

#[derive(Debug, Serialize)]
struct ProfileResponse {
    user: UserView,
}

// ==================== Handlers ====================

/// Registers a new account.
async fn signup(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<impl IntoResponse, AuthApiError> {
    body.validate()
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    state.accounts.signup(&body.email, &body.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "account created",
        }),
    ))
}

/// Authenticates credentials and issues a session token.
async fn signin(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<Json<IssuedToken>, AuthApiError> {
    body.validate()
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    let issued = state.accounts.login(&body.email, &body.password).await?;
    Ok(Json(issued))
}

/// Returns the authenticated account.
async fn me(CurrentUser(identity): CurrentUser) -> Json<UserView> {
    Json(UserView {
        email: identity.subject,
        id: identity.account_id,
    })
}

/// Returns the decoded token view for the authenticated account.
async fn profile(CurrentUser(identity): CurrentUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user: UserView {
            email: identity.subject,
            id: identity.account_id,
        },
    })
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use crate::api::test_support::test_router;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn get_with_auth(app: &Router, uri: &str, auth: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn signup_signin_and_gate_scenario() {
        let app = test_router();
        let creds = json!({ "email": "a@x.com", "password": "p1" });

        // Fresh signup succeeds.
        let (status, _) = send_json(&app, "POST", "/api/v1/auth/signup", creds.clone()).await;
        assert_eq!(status, StatusCode::CREATED);

        // Same identifier again conflicts, even with another password.
        let (status, body) = send_json(
            &app,
            "POST",
            "/api/v1/auth/signup",
            json!({ "email": "a@x.com", "password": "p2" }),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["message"].as_str().unwrap().contains("already registered"));

        // Original credentials log in.
        let (status, body) = send_json(&app, "POST", "/api/v1/auth/signin", creds).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "bearer");
        let token = body["access_token"].as_str().unwrap().to_string();

        // The gate accepts the issued token.
        let bearer = format!("Bearer {token}");
        let (status, body) = get_with_auth(&app, "/api/v1/auth/me", Some(&bearer)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "a@x.com");

        // Garbage token and missing header both reject.
        let (status, _) = get_with_auth(&app, "/api/v1/auth/me", Some("Bearer garbage")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = get_with_auth(&app, "/api/v1/auth/me", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_failures_share_one_shape() {
        let app = test_router();
        send_json(
            &app,
            "POST",
            "/api/v1/auth/signup",
            json!({ "email": "a@x.com", "password": "p1" }),
        )
        .await;

        let (wrong_status, wrong_body) = send_json(
            &app,
            "POST",
            "/api/v1/auth/signin",
            json!({ "email": "a@x.com", "password": "nope" }),
        )
        .await;
        let (ghost_status, ghost_body) = send_json(
            &app,
            "POST",
            "/api/v1/auth/signin",
            json!({ "email": "ghost@x.com", "password": "p1" }),
        )
        .await;

        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        assert_eq!(ghost_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_body, ghost_body);
    }

    #[tokio::test]
    async fn malformed_email_fails_validation() {
        let app = test_router();

        let (status, _) = send_json(
            &app,
            "POST",
            "/api/v1/auth/signup",
            json!({ "email": "not-an-email", "password": "p1" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn profile_wraps_the_claims_view() {
        let app = test_router();
        send_json(
            &app,
            "POST",
            "/api/v1/auth/signup",
            json!({ "email": "a@x.com", "password": "p1" }),
        )
        .await;
        let (_, body) = send_json(
            &app,
            "POST",
            "/api/v1/auth/signin",
            json!({ "email": "a@x.com", "password": "p1" }),
        )
        .await;
        let bearer = format!("Bearer {}", body["access_token"].as_str().unwrap());

        let (status, body) = get_with_auth(&app, "/api/v1/users/profile", Some(&bearer)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["email"], "a@x.com");
        assert!(!body["user"]["id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn wrong_scheme_rejects() {
        let app = test_router();
        let (status, _) = get_with_auth(&app, "/api/v1/auth/me", Some("Basic dXNlcjpwYXNz")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
