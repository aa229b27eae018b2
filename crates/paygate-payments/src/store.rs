//! Payment store collaborator interface.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::order::{PaymentOrder, PaymentStatus};

/// Errors surfaced by payment store implementations.
#[derive(Debug, Error)]
pub enum PaymentStoreError {
    /// The store cannot be reached.
    #[error("store unreachable: {0}")]
    Unavailable(String),
}

/// Persistent record of payment orders, keyed by gateway order ID.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Record a new order.
    async fn insert(&self, order: PaymentOrder) -> Result<(), PaymentStoreError>;

    /// Look up an order by its gateway order ID.
    async fn find_by_order_id(&self, order_id: &str)
        -> Result<Option<PaymentOrder>, PaymentStoreError>;

    /// Transition an order to `paid`. Returns `false` when no such order
    /// exists.
    async fn mark_paid(&self, order_id: &str) -> Result<bool, PaymentStoreError>;

    /// List all orders opened by a user, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<PaymentOrder>, PaymentStoreError>;
}

/// In-memory payment store for tests and local runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryPaymentStore {
    orders: Arc<RwLock<HashMap<String, PaymentOrder>>>,
}

impl MemoryPaymentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count stored orders.
    pub fn count(&self) -> usize {
        self.orders.read().len()
    }
}

#[async_trait]
impl PaymentStore for MemoryPaymentStore {
    async fn insert(&self, order: PaymentOrder) -> Result<(), PaymentStoreError> {
        self.orders.write().insert(order.order_id.clone(), order);
        Ok(())
    }

    async fn find_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Option<PaymentOrder>, PaymentStoreError> {
        Ok(self.orders.read().get(order_id).cloned())
    }

    async fn mark_paid(&self, order_id: &str) -> Result<bool, PaymentStoreError> {
        let mut orders = self.orders.write();
        match orders.get_mut(order_id) {
            Some(order) => {
                order.status = PaymentStatus::Paid;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<PaymentOrder>, PaymentStoreError> {
        let mut orders: Vec<_> = self
            .orders
            .read()
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}
