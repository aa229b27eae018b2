//! # Paygate Payments
//!
//! Payment order flow for the paygate service.
//!
//! This crate provides:
//! - **Payment Orders**: order records tracked from creation to payment
//! - **Signed-Order Verification**: constant-time HMAC check of the
//!   gateway's payment signature
//! - **Gateway Interface**: the external payment-gateway collaborator seam
//! - **Payment Store**: the injected persistence collaborator interface
//!
//! The gateway's own settlement, ledger reconciliation, and retry
//! machinery are the gateway's responsibility; this crate covers only the
//! order lifecycle the service observes.

pub mod error;
pub mod gateway;
pub mod order;
pub mod service;
pub mod signature;
pub mod store;

// Re-export main types
pub use error::{PaymentError, Result};
pub use gateway::{GatewayOrder, LocalGateway, PaymentGateway};
pub use order::{PaymentOrder, PaymentStatus};
pub use service::PaymentService;
pub use signature::{sign_order, verify_order_signature};
pub use store::{MemoryPaymentStore, PaymentStore, PaymentStoreError};
