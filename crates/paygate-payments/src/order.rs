//! Payment order records.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Status of a payment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Order created at the gateway, awaiting payment.
    Created,
    /// Payment verified against the gateway signature.
    Paid,
}

impl PaymentStatus {
    /// Wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Paid => "paid",
        }
    }
}

/// A payment order recorded against a gateway order ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOrder {
    /// Gateway-assigned order ID.
    pub order_id: String,
    /// Subject (account email) that opened the order.
    pub user_id: String,
    /// Amount in minor currency units.
    pub amount: u64,
    /// ISO currency code.
    pub currency: String,
    /// Current order status.
    pub status: PaymentStatus,
    /// Unix timestamp when created.
    pub created_at: u64,
}

impl PaymentOrder {
    /// Create a new order record in the `created` state.
    pub fn new(order_id: String, user_id: String, amount: u64, currency: String) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        Self {
            order_id,
            user_id,
            amount,
            currency,
            status: PaymentStatus::Created,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_starts_created() {
        let order = PaymentOrder::new(
            "order_abc".to_string(),
            "a@x.com".to_string(),
            50_000,
            "INR".to_string(),
        );
        assert_eq!(order.status, PaymentStatus::Created);
        assert_eq!(order.amount, 50_000);
        assert!(order.created_at > 0);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Created).unwrap(),
            "\"created\""
        );
        assert_eq!(serde_json::to_string(&PaymentStatus::Paid).unwrap(), "\"paid\"");
        assert_eq!(PaymentStatus::Paid.as_str(), "paid");
    }
}
