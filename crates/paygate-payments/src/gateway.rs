//! Payment gateway collaborator interface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// An order created at the payment gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Gateway-assigned order ID.
    pub id: String,
    /// Amount in minor currency units.
    pub amount: u64,
    /// ISO currency code.
    pub currency: String,
}

/// Remote gateway the service creates orders against.
///
/// Only the calls the service makes are specified here; settlement and
/// retries live on the gateway's side of the seam.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order to be paid by the client.
    async fn create_order(&self, amount: u64, currency: &str) -> Result<GatewayOrder>;
}

/// Gateway stand-in that mints order IDs locally.
///
/// Used for tests and local runs without gateway credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalGateway;

#[async_trait]
impl PaymentGateway for LocalGateway {
    async fn create_order(&self, amount: u64, currency: &str) -> Result<GatewayOrder> {
        Ok(GatewayOrder {
            id: format!("order_{}", Uuid::new_v4().simple()),
            amount,
            currency: currency.to_string(),
        })
    }
}
