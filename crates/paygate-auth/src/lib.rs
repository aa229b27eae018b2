//! # Paygate Authentication Core
//!
//! Credential storage, stateless session tokens, and request authorization
//! for the paygate service.
//!
//! This crate provides:
//! - **Password Hashing**: Argon2id digests with a fresh salt per call
//! - **Session Tokens**: signed, expiring HS256 tokens carrying claims
//! - **Authorization Gate**: `Authorization: Bearer <token>` validation
//!   yielding an authenticated identity context
//! - **Account Service**: signup and login orchestration
//! - **Credential Store**: the injected persistence collaborator interface
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use paygate_auth::{gate, AccountService, MemoryCredentialStore, TokenCodec};
//!
//! # async fn demo() -> paygate_auth::Result<()> {
//! let codec = TokenCodec::new("server-secret", Duration::from_secs(30 * 60));
//! let service = AccountService::new(Arc::new(MemoryCredentialStore::new()), codec.clone());
//!
//! service.signup("alice@example.com", "hunter2!").await?;
//! let issued = service.login("alice@example.com", "hunter2!").await?;
//!
//! let header = format!("Bearer {}", issued.access_token);
//! let identity = gate::authorize(Some(&header), &codec)?;
//! assert_eq!(identity.subject, "alice@example.com");
//! # Ok(())
//! # }
//! ```
//!
//! Every request is authenticated independently: tokens are not stored
//! server-side and decisions are never cached. Revocation before expiry is
//! impossible by construction; a deployment that needs it must add a
//! deny-list collaborator keyed by token identity.

pub mod account;
pub mod error;
pub mod gate;
pub mod password;
pub mod service;
pub mod store;
pub mod token;

// Re-export main types
pub use account::{Account, IssuedToken};
pub use error::{AuthError, Result};
pub use gate::{authorize, AuthContext};
pub use password::{hash_password, verify_password};
pub use service::AccountService;
pub use store::{CredentialStore, MemoryCredentialStore, StoreError};
pub use token::{Claims, TokenCodec, DEFAULT_TOKEN_EXPIRY};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn full_signup_login_gate_flow() {
        let codec = TokenCodec::new("test-secret", DEFAULT_TOKEN_EXPIRY);
        let service = AccountService::new(Arc::new(MemoryCredentialStore::new()), codec.clone());

        service.signup("a@x.com", "p1").await.unwrap();
        assert!(matches!(
            service.signup("a@x.com", "p2").await,
            Err(AuthError::Conflict(_))
        ));

        let issued = service.login("a@x.com", "p1").await.unwrap();
        assert_eq!(issued.token_type, "bearer");

        let header = format!("Bearer {}", issued.access_token);
        let identity = authorize(Some(&header), &codec).unwrap();
        assert_eq!(identity.subject, "a@x.com");

        assert!(matches!(
            authorize(Some("Bearer garbage"), &codec),
            Err(AuthError::Unauthorized)
        ));
        assert!(matches!(authorize(None, &codec), Err(AuthError::Unauthorized)));
    }
}
