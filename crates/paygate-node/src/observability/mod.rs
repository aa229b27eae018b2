//! Structured logging for the service.
//!
//! ```rust,ignore
//! use paygate_node::observability::init_logging;
//!
//! init_logging("info", false);
//! ```

mod logging;

pub use logging::{init_logging, LogFormat};
