//! Error types for the payment flow.

use thiserror::Error;

/// Result type for payment operations.
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Errors that can occur in the payment flow.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// No order with the given ID.
    #[error("payment not found: {0}")]
    NotFound(String),

    /// The gateway signature did not match the order/payment pair.
    #[error("payment verification failed")]
    VerificationFailed,

    /// The payment gateway collaborator failed.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// Payment store collaborator cannot be reached.
    #[error("payment store unavailable: {0}")]
    StorageUnavailable(String),
}

impl PaymentError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::VerificationFailed => 400,
            Self::Gateway(_) => 502,
            Self::StorageUnavailable(_) => 503,
        }
    }

    /// Get the client-facing message.
    ///
    /// Collaborator faults collapse to generic messages; their detail
    /// stays in logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Gateway(_) => "payment gateway error".to_string(),
            Self::StorageUnavailable(_) => "service unavailable".to_string(),
            other => other.to_string(),
        }
    }
}
