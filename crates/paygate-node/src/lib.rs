//! # Paygate Node
//!
//! The runnable paygate service: an HTTP API exposing user signup/login
//! and payment operations, backed by the authentication core in
//! [`paygate_auth`] and the payment flow in [`paygate_payments`].
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     Paygate Node                       │
//! ├────────────────────────────────────────────────────────┤
//! │  HTTP API Layer (axum)                                 │
//! │  • Auth API (signup, signin, profile)                  │
//! │  • Payments API (create, verify, list)                 │
//! │  • Health probes (liveness, readiness)                 │
//! │                          │                             │
//! │  Authorization Gate (per request, stateless)           │
//! │                          │                             │
//! │  Services                                              │
//! │  • AccountService  → CredentialStore collaborator      │
//! │  • PaymentService  → PaymentGateway + PaymentStore     │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Router assembly and shared application state
//! - [`auth_api`] - Signup/signin/profile endpoints and the request gate
//! - [`payments_api`] - Payment order endpoints
//! - [`config`] - Service configuration
//! - [`health`] - Health check endpoints (liveness, readiness)
//! - [`observability`] - Structured logging

pub mod api;
pub mod auth_api;
pub mod config;
pub mod health;
pub mod observability;
pub mod payments_api;
