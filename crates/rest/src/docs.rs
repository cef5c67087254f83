//! Generated OpenAPI description.
//!
//! Operations are documented with `#[utoipa::path]` on each handler, relative
//! to the API prefix. [`api_doc`] nests them under the configured prefix.

use utoipa::OpenApi;

use crate::handlers;

/// Top-level document: metadata and tag descriptions.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CRUD API scaffold",
        description = "Boilerplate JSON CRUD API for a single `test` resource."
    ),
    tags(
        (name = "Test", description = "CRUD operations on the test resource"),
        (name = "Health", description = "Service self check")
    )
)]
pub struct ApiDoc;

/// Resource operations, with paths relative to the API prefix.
#[derive(OpenApi)]
#[openapi(paths(
    handlers::create::create_handler,
    handlers::read::read_handler,
    handlers::read::read_one_handler,
    handlers::update::update_handler,
    handlers::delete::delete_handler,
    handlers::health::health_handler,
))]
pub struct ResourceApi;

/// Builds the OpenAPI document with every operation mounted under `api_prefix`.
pub fn api_doc(api_prefix: &str) -> utoipa::openapi::OpenApi {
    ApiDoc::openapi().nest(api_prefix, ResourceApi::openapi())
}
