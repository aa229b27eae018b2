//! Account records and issued-token payloads.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// A registered account.
///
/// The record stored by the credential store collaborator. The password
/// is held only as a one-way digest; the plaintext is never persisted or
/// logged. Immutable after signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account ID.
    pub id: String,
    /// Unique email identifier.
    pub email: String,
    /// Argon2id digest of the password (salt and parameters embedded).
    pub password_hash: String,
    /// Unix timestamp when created.
    pub created_at: u64,
}

impl Account {
    /// Create a new account record with a freshly minted ID.
    pub fn new(email: String, password_hash: String) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        Self {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash,
            created_at: now,
        }
    }
}

/// A session token issued at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The signed compact token string.
    pub access_token: String,
    /// Token type marker, always `"bearer"`.
    pub token_type: String,
}

impl IssuedToken {
    /// Wrap a signed token with the bearer type marker.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
