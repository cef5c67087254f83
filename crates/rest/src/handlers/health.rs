//! Health check endpoint handler.
//!
//! Asks the service whether it can serve requests.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::service::TestService;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [prefix]/health`
///
/// # Response
///
/// - `200 OK` - The service reported healthy
/// - `500 Internal Server Error` - The service reported unhealthy or failed
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    summary = "Service self check",
    responses(
        (status = 200, description = "Service healthy", body = Object),
        (status = 500, description = "Service unhealthy")
    )
)]
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: TestService,
{
    debug!("Processing health check request");

    let service = state.service();
    if !service.self_check().await? {
        return Err(RestError::InternalError {
            message: format!("Service '{}' reported unhealthy", service.name()),
        });
    }

    let health_response = serde_json::json!({
        "status": "healthy",
        "service": service.name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}
