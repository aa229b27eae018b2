//! Account service: signup and login orchestration.

use std::sync::Arc;

use crate::account::{Account, IssuedToken};
use crate::error::{AuthError, Result};
use crate::password::{hash_password, verify_password};
use crate::store::{CredentialStore, StoreError};
use crate::token::TokenCodec;

/// Orchestrates the credential store, password hasher, and token codec.
///
/// Holds no mutable state of its own; safe to clone into concurrent
/// request handlers.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn CredentialStore>,
    codec: TokenCodec,
}

impl AccountService {
    /// Create a service over an injected credential store.
    pub fn new(store: Arc<dyn CredentialStore>, codec: TokenCodec) -> Self {
        Self { store, codec }
    }

    /// Access the token codec shared with the authorization gate.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Register a new account.
    ///
    /// The lookup-then-insert here is not one atomic store operation.
    /// Two concurrent signups for the same email can both pass the
    /// lookup; the store's unique index breaks the tie, and the loser
    /// surfaces as [`AuthError::Conflict`].
    pub async fn signup(&self, email: &str, password: &str) -> Result<()> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "email and password are required".to_string(),
            ));
        }

        if self.find(email).await?.is_some() {
            return Err(AuthError::Conflict(email.to_string()));
        }

        let digest = hash_password(password)?;
        match self.store.insert(Account::new(email.to_string(), digest)).await {
            Ok(()) => {
                tracing::info!(email = %email, "account created");
                Ok(())
            }
            Err(StoreError::DuplicateKey(email)) => Err(AuthError::Conflict(email)),
            Err(StoreError::Unavailable(reason)) => Err(AuthError::StorageUnavailable(reason)),
        }
    }

    /// Authenticate credentials and issue a session token.
    ///
    /// An unknown email and a wrong password take the same path to the
    /// same [`AuthError::Unauthorized`] value, so the response never
    /// reveals whether the account exists.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken> {
        let account = self.find(email).await?;

        let verified = match &account {
            Some(account) => verify_password(password, &account.password_hash),
            None => false,
        };
        let account = match (account, verified) {
            (Some(account), true) => account,
            _ => return Err(AuthError::Unauthorized),
        };

        let token = self
            .codec
            .encode(&account.email, &account.email, &account.id)?;
        Ok(IssuedToken::bearer(token))
    }

    async fn find(&self, email: &str) -> Result<Option<Account>> {
        self.store.find_by_email(email).await.map_err(|e| match e {
            StoreError::Unavailable(reason) => AuthError::StorageUnavailable(reason),
            StoreError::DuplicateKey(key) => {
                AuthError::StorageUnavailable(format!("unexpected duplicate key: {key}"))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCredentialStore;
    use crate::token::DEFAULT_TOKEN_EXPIRY;
    use async_trait::async_trait;

    fn service() -> AccountService {
        AccountService::new(
            Arc::new(MemoryCredentialStore::new()),
            TokenCodec::new("service-test-secret", DEFAULT_TOKEN_EXPIRY),
        )
    }

    /// Store whose every operation fails as unreachable.
    struct DownStore;

    #[async_trait]
    impl CredentialStore for DownStore {
        async fn find_by_email(
            &self,
            _email: &str,
        ) -> std::result::Result<Option<Account>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn insert(&self, _account: Account) -> std::result::Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn ping(&self) -> std::result::Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn signup_then_login() {
        let service = service();
        service.signup("a@x.com", "p1").await.unwrap();

        let issued = service.login("a@x.com", "p1").await.unwrap();
        assert_eq!(issued.token_type, "bearer");

        let claims = service.codec().decode(&issued.access_token).unwrap();
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.email, "a@x.com");
        assert!(!claims.id.is_empty());
    }

    #[tokio::test]
    async fn duplicate_signup_conflicts() {
        let service = service();
        service.signup("a@x.com", "p1").await.unwrap();

        let result = service.signup("a@x.com", "p2").await;
        assert!(matches!(result, Err(AuthError::Conflict(email)) if email == "a@x.com"));

        // The original credentials still work.
        assert!(service.login("a@x.com", "p1").await.is_ok());
        assert!(matches!(
            service.login("a@x.com", "p2").await,
            Err(AuthError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn empty_fields_fail_validation() {
        let service = service();
        assert!(matches!(
            service.signup("", "p1").await,
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            service.signup("a@x.com", "").await,
            Err(AuthError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let service = service();
        service.signup("a@x.com", "p1").await.unwrap();

        let wrong_password = service.login("a@x.com", "wrong").await.unwrap_err();
        let unknown_email = service.login("ghost@x.com", "p1").await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::Unauthorized));
        assert!(matches!(unknown_email, AuthError::Unauthorized));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert_eq!(wrong_password.status_code(), unknown_email.status_code());
    }

    #[tokio::test]
    async fn unreachable_store_is_a_server_fault() {
        let codec = TokenCodec::new("service-test-secret", DEFAULT_TOKEN_EXPIRY);
        let service = AccountService::new(Arc::new(DownStore), codec);

        assert!(matches!(
            service.signup("a@x.com", "p1").await,
            Err(AuthError::StorageUnavailable(_))
        ));
        assert!(matches!(
            service.login("a@x.com", "p1").await,
            Err(AuthError::StorageUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn stored_digest_is_not_the_plaintext() {
        let store = Arc::new(MemoryCredentialStore::new());
        let codec = TokenCodec::new("service-test-secret", DEFAULT_TOKEN_EXPIRY);
        let service = AccountService::new(store.clone(), codec);

        service.signup("a@x.com", "plaintext-password").await.unwrap();
        let account = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_ne!(account.password_hash, "plaintext-password");
        assert!(!account.password_hash.contains("plaintext-password"));
    }
}
