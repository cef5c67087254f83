//! Delete handler.
//!
//! `DELETE [prefix]/test/{id}`

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::service::{QueryParams, TestService};
use crate::state::AppState;

/// Handler for the delete operation.
///
/// Unlike read-one and update there is no presence check on the id; it is
/// forwarded as received.
///
/// # Response
///
/// - `204 No Content` - Deleted; the service result is discarded
/// - `500 Internal Server Error` - The service failed (empty body)
#[utoipa::path(
    delete,
    path = "/test/{id}",
    tag = "Test",
    summary = "Delete a test by id",
    params(("id" = String, Path, description = "Test id")),
    responses(
        (status = 204, description = "Test removed"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Query(query): Query<QueryParams>,
) -> RestResult<Response>
where
    S: TestService,
{
    debug!(id = %id, query = ?query, "Processing delete request");

    state.service().delete(&id, query).await?;

    debug!(id = %id, "Test deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
