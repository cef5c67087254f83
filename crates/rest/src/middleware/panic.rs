//! Panic recovery.
//!
//! Used with `tower_http::catch_panic::CatchPanicLayer::custom` so that a
//! panicking handler or service ends the request the same way a service error
//! does: logged, then a bare 500.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Converts a caught panic into an empty 500 response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = panic_message(err.as_ref());
    error!(panic = %details, "Request handler panicked");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}
