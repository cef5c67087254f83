//! Fallback handler for unmatched requests.

use axum::http::Uri;
use tracing::debug;

use crate::error::RestError;

/// Answers every request no route matched with an empty 404.
pub async fn not_found_handler(uri: Uri) -> RestError {
    debug!(path = %uri.path(), "No route matched");
    RestError::NotFound {
        path: uri.path().to_string(),
    }
}
