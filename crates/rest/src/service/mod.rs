//! Service layer for the `test` resource.
//!
//! The [`TestService`] trait is where business logic and data access belong.
//! The HTTP handlers forward path, query and body to it unmodified and only
//! decide on the status code. [`PlaceholderTestService`] is the stand-in the
//! server ships with; replace it with a real implementation per project.

mod placeholder;

pub use placeholder::PlaceholderTestService;

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Decoded query string, forwarded to the service as-is.
pub type QueryParams = HashMap<String, String>;

/// Errors a service implementation may raise.
///
/// The HTTP layer does not distinguish between them: every variant is
/// logged and answered with a bare 500.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The operation has no implementation yet.
    #[error("operation not implemented: {operation}")]
    NotImplemented {
        /// Name of the operation that was called.
        operation: String,
    },

    /// A failure described by the service itself.
    #[error("service error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },

    /// Any other error bubbled up from the implementation.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Business logic for the `test` resource.
///
/// Payloads are opaque JSON values; the trait makes no assumption about
/// their shape. Every method receives the request's query parameters.
#[async_trait]
pub trait TestService: Send + Sync {
    /// Returns a human-readable name for this implementation.
    fn name(&self) -> &'static str;

    /// Creates a resource from `body`.
    async fn create(&self, body: Value, query: QueryParams) -> ServiceResult<Value>;

    /// Lists resources.
    async fn read(&self, query: QueryParams) -> ServiceResult<Value>;

    /// Reads a single resource by id.
    async fn read_one(&self, id: &str, query: QueryParams) -> ServiceResult<Value>;

    /// Replaces the resource `id` with `body`.
    async fn update(&self, id: &str, body: Value, query: QueryParams) -> ServiceResult<Value>;

    /// Deletes the resource `id`. The returned value is discarded by the
    /// HTTP layer, which always answers 204.
    async fn delete(&self, id: &str, query: QueryParams) -> ServiceResult<Value>;

    /// Reports whether the service is able to serve requests.
    async fn self_check(&self) -> ServiceResult<bool>;
}
