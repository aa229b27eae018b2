//! Payment service: order creation and verification.

use std::sync::Arc;

use crate::error::{PaymentError, Result};
use crate::gateway::{GatewayOrder, PaymentGateway};
use crate::order::PaymentOrder;
use crate::signature::verify_order_signature;
use crate::store::{PaymentStore, PaymentStoreError};

/// Orchestrates the payment gateway and the payment store.
#[derive(Clone)]
pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
    store: Arc<dyn PaymentStore>,
    gateway_secret: String,
}

impl PaymentService {
    /// Create a service over injected gateway and store collaborators.
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        store: Arc<dyn PaymentStore>,
        gateway_secret: String,
    ) -> Self {
        Self {
            gateway,
            store,
            gateway_secret,
        }
    }

    /// Open a payment order for a user.
    ///
    /// Creates the order at the gateway, then records it locally in the
    /// `created` state.
    pub async fn create_payment(
        &self,
        user_id: &str,
        amount: u64,
        currency: &str,
    ) -> Result<GatewayOrder> {
        let order = self.gateway.create_order(amount, currency).await?;

        let record = PaymentOrder::new(
            order.id.clone(),
            user_id.to_string(),
            order.amount,
            order.currency.clone(),
        );
        self.store.insert(record).await.map_err(map_store_err)?;

        tracing::info!(order_id = %order.id, user = %user_id, "payment order created");
        Ok(order)
    }

    /// Verify a completed payment against the gateway signature.
    ///
    /// On a valid signature the order transitions to `paid`; a missing
    /// order is [`PaymentError::NotFound`] and a bad signature is
    /// [`PaymentError::VerificationFailed`].
    pub async fn verify_payment(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<()> {
        if !verify_order_signature(order_id, payment_id, signature, &self.gateway_secret) {
            tracing::warn!(order_id = %order_id, "payment signature rejected");
            return Err(PaymentError::VerificationFailed);
        }

        let updated = self.store.mark_paid(order_id).await.map_err(map_store_err)?;
        if !updated {
            return Err(PaymentError::NotFound(order_id.to_string()));
        }

        tracing::info!(order_id = %order_id, "payment verified");
        Ok(())
    }

    /// Look up a single order.
    pub async fn get_payment(&self, order_id: &str) -> Result<PaymentOrder> {
        self.store
            .find_by_order_id(order_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| PaymentError::NotFound(order_id.to_string()))
    }

    /// List the orders opened by a user, newest first.
    pub async fn list_payments(&self, user_id: &str) -> Result<Vec<PaymentOrder>> {
        self.store.list_for_user(user_id).await.map_err(map_store_err)
    }
}

fn map_store_err(err: PaymentStoreError) -> PaymentError {
    match err {
        PaymentStoreError::Unavailable(reason) => PaymentError::StorageUnavailable(reason),
    }
}
