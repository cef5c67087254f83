//! Read handlers.
//!
//! - `GET [prefix]/test` - list
//! - `GET [prefix]/test/{id}` - read one

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{ErrorMessage, RestResult};
use crate::extractors::RequiredId;
use crate::service::{QueryParams, TestService};
use crate::state::AppState;

/// Handler for the list operation.
///
/// # Response
///
/// - `200 OK` - The service result as JSON
/// - `500 Internal Server Error` - The service failed (empty body)
#[utoipa::path(
    get,
    path = "/test",
    tag = "Test",
    summary = "List all tests",
    responses(
        (status = 200, description = "List returned", body = Object),
        (status = 500, description = "Internal error")
    )
)]
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<QueryParams>,
) -> RestResult<Response>
where
    S: TestService,
{
    debug!(query = ?query, "Processing read request");

    let result = state.service().read(query).await?;

    Ok((StatusCode::OK, Json(result)).into_response())
}

/// Handler for the read-one operation.
///
/// # Response
///
/// - `200 OK` - The service result as JSON
/// - `400 Bad Request` - The id is missing or blank
/// - `500 Internal Server Error` - The service failed (empty body)
///
/// # Example
///
/// ```http
/// GET /api/test/42?expand=true HTTP/1.1
/// ```
#[utoipa::path(
    get,
    path = "/test/{id}",
    tag = "Test",
    summary = "Get a test by id",
    params(("id" = String, Path, description = "Test id")),
    responses(
        (status = 200, description = "Test found", body = Object),
        (status = 400, description = "Missing or invalid id", body = ErrorMessage),
        (status = 500, description = "Internal error")
    )
)]
pub async fn read_one_handler<S>(
    State(state): State<AppState<S>>,
    id: RequiredId,
    Query(query): Query<QueryParams>,
) -> RestResult<Response>
where
    S: TestService,
{
    debug!(id = %id.as_str(), query = ?query, "Processing read-one request");

    let result = state.service().read_one(id.as_str(), query).await?;

    Ok((StatusCode::OK, Json(result)).into_response())
}
