//! Create handler.
//!
//! `POST [prefix]/test`

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::JsonPayload;
use crate::service::{QueryParams, TestService};
use crate::state::AppState;

/// Handler for the create operation.
///
/// Forwards the body and query to [`TestService::create`] unmodified.
///
/// # Response
///
/// - `201 Created` - The service result as JSON
/// - `500 Internal Server Error` - The service failed (empty body)
///
/// # Example
///
/// ```http
/// POST /api/test HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "first"}
/// ```
#[utoipa::path(
    post,
    path = "/test",
    tag = "Test",
    summary = "Create a new test",
    request_body(content = Object, description = "Opaque JSON payload", content_type = "application/json"),
    responses(
        (status = 201, description = "Test created", body = Object),
        (status = 500, description = "Internal error")
    )
)]
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<QueryParams>,
    JsonPayload(body): JsonPayload,
) -> RestResult<Response>
where
    S: TestService,
{
    debug!(query = ?query, "Processing create request");

    let result = state.service().create(body, query).await?;

    Ok((StatusCode::CREATED, Json(result)).into_response())
}
