//! Credential store collaborator interface.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::account::Account;

/// Errors surfaced by credential store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert hit the store's unique index.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// The store cannot be reached.
    #[error("store unreachable: {0}")]
    Unavailable(String),
}

/// Persistent mapping from email identifier to account record.
///
/// Production deployments back this with a document database holding a
/// unique index on `email`. That index, not the service-layer lookup, is
/// what enforces uniqueness under concurrent signups.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up an account by its email identifier.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Insert a new account.
    ///
    /// Fails with [`StoreError::DuplicateKey`] when the email is taken.
    async fn insert(&self, account: Account) -> Result<(), StoreError>;

    /// Cheap reachability probe, used by health checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// In-memory credential store for tests and local runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count stored accounts.
    pub fn count(&self) -> usize {
        self.accounts.read().len()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().get(email).cloned())
    }

    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&account.email) {
            return Err(StoreError::DuplicateKey(account.email.clone()));
        }
        accounts.insert(account.email.clone(), account);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
