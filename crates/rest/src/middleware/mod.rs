//! HTTP middleware for the CRUD API.
//!
//! - [`request_logger`] - One log line per request
//! - [`panic`] - Turns panics into empty 500 responses

pub mod panic;
pub mod request_logger;

pub use panic::panic_response;
pub use request_logger::{X_REQUEST_ID, request_logger_middleware};
