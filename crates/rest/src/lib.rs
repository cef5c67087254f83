//! # scaffold-rest - JSON CRUD API scaffold
//!
//! This crate wires together a minimal HTTP CRUD API for a single resource
//! (`test`): CORS, JSON body parsing, request logging, generated OpenAPI
//! documentation, the resource's REST routes, and a controller/service pair
//! whose service is a placeholder meant to be replaced per project.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scaffold_rest::{create_app, service::PlaceholderTestService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = create_app(PlaceholderTestService::new());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success |
//! |-----------|-------------|-------------|---------|
//! | create | POST | `/api/test` | 201 |
//! | read | GET | `/api/test` | 200 |
//! | read one | GET | `/api/test/{id}` | 200 |
//! | update | PUT | `/api/test/{id}` | 200 |
//! | delete | DELETE | `/api/test/{id}` | 204 |
//! | health | GET | `/api/health` | 200 |
//! | docs | GET | `/docs` | Swagger UI |
//! | openapi | GET | `/api-docs/openapi.json` | 200 |
//!
//! Any other path returns an empty 404.
//!
//! ## Error Handling
//!
//! | HTTP Status | Cause | Body |
//! |-------------|-------|------|
//! | 400 | Missing `{id}` on read one / update, malformed JSON | `{"message": "..."}` |
//! | 404 | No matching route | empty |
//! | 408 | Request timeout | empty |
//! | 500 | Service error or panic | empty |
//!
//! ## Architecture
//!
//! - [`config`] - Server configuration
//! - [`error`] - Error types and their HTTP mapping
//! - [`state`] - Application state (service, configuration)
//! - [`service`] - The service trait and its placeholder implementation
//! - [`handlers`] - HTTP handlers for each operation
//! - [`extractors`] - Axum extractors for body and path id
//! - [`middleware`] - Request logging and panic recovery
//! - [`docs`] - OpenAPI document
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use service::{PlaceholderTestService, ServiceError, TestService};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::DefaultBodyLimit, http::StatusCode};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::middleware::{X_REQUEST_ID, panic_response, request_logger_middleware};

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(service: S) -> Router
where
    S: TestService + 'static,
{
    create_app_with_config(service, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Middleware is registered in this order, outermost first: request id,
/// tracing and request logging, CORS, timeout, body limit, panic recovery.
///
/// # Example
///
/// ```rust
/// use scaffold_rest::{create_app_with_config, PlaceholderTestService, ServerConfig};
///
/// let config = ServerConfig {
///     api_prefix: "/v1".to_string(),
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(PlaceholderTestService, config);
/// ```
pub fn create_app_with_config<S>(service: S, config: ServerConfig) -> Router
where
    S: TestService + 'static,
{
    info!(
        service = service.name(),
        api_prefix = %config.api_prefix,
        docs_path = %config.docs_path,
        "Creating REST API server"
    );

    let state = AppState::new(Arc::new(service), config.clone());

    let router = routing::create_routes(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    let router = router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(request_logger_middleware)),
    );

    if config.enable_request_id {
        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID.clone(), MakeRequestUuid))
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone())),
        )
    } else {
        router
    }
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// takes precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "scaffold_rest={},scaffold_server={},tower_http=debug",
            level, level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
