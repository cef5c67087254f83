//! Update handler.
//!
//! `PUT [prefix]/test/{id}`

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{ErrorMessage, RestResult};
use crate::extractors::{JsonPayload, RequiredId};
use crate::service::{QueryParams, TestService};
use crate::state::AppState;

/// Handler for the update operation.
///
/// The id is checked before the body is read, so a blank id yields 400 even
/// when the body is malformed.
///
/// # Response
///
/// - `200 OK` - The service result as JSON
/// - `400 Bad Request` - The id is missing or blank
/// - `500 Internal Server Error` - The service failed (empty body)
#[utoipa::path(
    put,
    path = "/test/{id}",
    tag = "Test",
    summary = "Update a test by id",
    params(("id" = String, Path, description = "Test id")),
    request_body(content = Object, description = "Opaque JSON payload", content_type = "application/json"),
    responses(
        (status = 200, description = "Test updated", body = Object),
        (status = 400, description = "Missing or invalid id", body = ErrorMessage),
        (status = 500, description = "Internal error")
    )
)]
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    id: RequiredId,
    Query(query): Query<QueryParams>,
    JsonPayload(body): JsonPayload,
) -> RestResult<Response>
where
    S: TestService,
{
    debug!(id = %id.as_str(), query = ?query, "Processing update request");

    let result = state.service().update(id.as_str(), body, query).await?;

    Ok((StatusCode::OK, Json(result)).into_response())
}
