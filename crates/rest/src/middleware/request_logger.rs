//! Request logging middleware.
//!
//! Logs one line per request with method, path, status and latency. The
//! request id is included when the request-id layer has set one.

use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderName,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Header carrying the request id.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Middleware function for request logging.
///
/// This can be used with `axum::middleware::from_fn`.
pub async fn request_logger_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request_id(&request);
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            request_id = %request_id,
            "Request completed with server error"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            request_id = %request_id,
            "Request completed"
        );
    }

    response
}

fn request_id(request: &Request) -> String {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| "-".to_string())
}
