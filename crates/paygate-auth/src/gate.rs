//! Request authorization gate.
//!
//! Validates the `Authorization` header of an inbound request and yields
//! the authenticated identity it asserts. Runs before any protected
//! handler body; every request is authenticated independently, with no
//! caching and no retries.

use crate::error::{AuthError, Result};
use crate::token::TokenCodec;

/// Authenticated identity derived from a valid session token.
///
/// Per-request and ephemeral: owned by the request-handling flow and
/// discarded when the request completes.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject (account email) asserted by the token.
    pub subject: String,
    /// Account ID claim.
    pub account_id: String,
}

impl AuthContext {
    /// Secondary active-user check.
    ///
    /// Rejects an empty subject as [`AuthError::InactiveUser`], a
    /// bad-request-class error distinct from the unauthorized rejections
    /// of [`authorize`].
    pub fn require_active(&self) -> Result<()> {
        if self.subject.is_empty() {
            return Err(AuthError::InactiveUser);
        }
        Ok(())
    }
}

/// Authorize a request from its raw `Authorization` header value.
///
/// The header must be exactly `Bearer <token>`. A missing or malformed
/// header, an undecodable or expired token, and a token without a subject
/// all reject as [`AuthError::Unauthorized`].
pub fn authorize(header: Option<&str>, codec: &TokenCodec) -> Result<AuthContext> {
    let header = header.ok_or(AuthError::Unauthorized)?.trim();

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Unauthorized)?
        .trim();
    if token.is_empty() || token.contains(' ') {
        return Err(AuthError::Unauthorized);
    }

    let claims = codec.decode(token).ok_or(AuthError::Unauthorized)?;
    if claims.sub.is_empty() {
        return Err(AuthError::Unauthorized);
    }

    Ok(AuthContext {
        subject: claims.sub,
        account_id: claims.id,
    })
}
