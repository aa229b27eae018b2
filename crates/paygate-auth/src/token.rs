//! Signed, expiring session tokens.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, Result};

/// Default token lifetime applied at issuance.
pub const DEFAULT_TOKEN_EXPIRY: Duration = Duration::from_secs(30 * 60);

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account's email identifier.
    pub sub: String,
    /// Email, mirrored for API consumers.
    pub email: String,
    /// Account ID.
    pub id: String,
    /// Expiry instant (unix seconds).
    pub exp: u64,
}

/// Codec for stateless session tokens.
///
/// Holds the process-wide signing secret and the fixed expiry duration.
/// Loaded once at startup and immutable afterwards; cloning shares the
/// same key material.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry: Duration,
}

impl TokenCodec {
    /// Create a codec from the server secret and expiry duration.
    pub fn new(secret: &str, expiry: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry,
        }
    }

    /// Issue a signed HS256 token for an account.
    ///
    /// The expiry claim is computed here: now plus the configured
    /// lifetime. The output is a compact `header.payload.signature`
    /// string, URL-safe by construction.
    pub fn encode(&self, subject: &str, email: &str, account_id: &str) -> Result<String> {
        let claims = Claims {
            sub: subject.to_string(),
            email: email.to_string(),
            id: account_id.to_string(),
            exp: epoch_secs() + self.expiry.as_secs(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Crypto(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Runs structural parse, signature verification, and expiry check in
    /// that order; the first failure short-circuits. All failure modes
    /// collapse to `None` for the caller. Side-effect-free.
    pub fn decode(&self, token: &str) -> Option<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .ok()
    }
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}
