//! Route configuration for the `test` resource.

use axum::{
    Router,
    routing::{get, put},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::api_doc;
use crate::handlers;
use crate::service::TestService;
use crate::state::AppState;

/// Creates the resource routes, relative to the API prefix.
///
/// # Routes
///
/// - `POST /test` - Create
/// - `GET /test` - List
/// - `GET /test/{id}` - Read one
/// - `PUT /test/{id}` - Update
/// - `DELETE /test/{id}` - Delete
/// - `GET /health` - Service self check
pub fn resource_routes<S>() -> Router<AppState<S>>
where
    S: TestService + 'static,
{
    Router::new()
        .route(
            "/test",
            get(handlers::read_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/test/{id}",
            put(handlers::update_handler::<S>)
                .get(handlers::read_one_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        .route("/health", get(handlers::health_handler::<S>))
        // Unsupported verbs on known paths fall through to 404 as well.
        .method_not_allowed_fallback(handlers::not_found_handler)
}

/// Creates the complete router: resource routes under the configured API
/// prefix, the Swagger UI and OpenAPI document, and the 404 fallback.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: TestService + 'static,
{
    let config = state.config().clone();
    let docs = SwaggerUi::new(config.docs_path.clone())
        .url(config.openapi_path.clone(), api_doc(&config.api_prefix));

    Router::new()
        .nest(&config.api_prefix, resource_routes::<S>())
        .merge(docs)
        .fallback(handlers::not_found_handler)
        .with_state(state)
}
