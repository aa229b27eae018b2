//! Error types for the authentication core.

use thiserror::Error;

/// Result type for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur in the authentication core.
///
/// Every collaborator failure is mapped to one of these before it crosses
/// the core boundary; no raw store or crypto error escapes.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request shape is malformed (missing or invalid fields).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Identifier is already registered.
    #[error("email already registered: {0}")]
    Conflict(String),

    /// Bad credentials, or a missing/invalid/expired token.
    ///
    /// Carries no detail: an unknown identifier and a wrong password must
    /// be indistinguishable to the caller.
    #[error("invalid credentials")]
    Unauthorized,

    /// Authenticated identity carries an empty subject.
    #[error("inactive user")]
    InactiveUser,

    /// Credential store collaborator cannot be reached.
    #[error("credential store unavailable: {0}")]
    StorageUnavailable(String),

    /// Cryptographic operation failed.
    #[error("crypto error: {0}")]
    Crypto(String),
}

impl AuthError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 422,
            Self::Conflict(_) => 409,
            Self::Unauthorized => 401,
            Self::InactiveUser => 400,
            Self::StorageUnavailable(_) => 503,
            Self::Crypto(_) => 500,
        }
    }

    /// Get the client-facing message.
    ///
    /// Server-fault variants collapse to a generic message; their detail
    /// stays in logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::StorageUnavailable(_) => "service unavailable".to_string(),
            Self::Crypto(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}
