//! Placeholder service implementation.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{QueryParams, ServiceResult, TestService};

/// A [`TestService`] with no business logic and no persistence.
///
/// Every operation succeeds without side effects: `read` returns an empty
/// list, the other operations return `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTestService;

impl PlaceholderTestService {
    /// Creates a new placeholder service.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TestService for PlaceholderTestService {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    async fn create(&self, body: Value, query: QueryParams) -> ServiceResult<Value> {
        debug!(body = %body, query = ?query, "placeholder create");
        Ok(Value::Null)
    }

    async fn read(&self, query: QueryParams) -> ServiceResult<Value> {
        debug!(query = ?query, "placeholder read");
        Ok(Value::Array(Vec::new()))
    }

    async fn read_one(&self, id: &str, query: QueryParams) -> ServiceResult<Value> {
        debug!(id = %id, query = ?query, "placeholder read_one");
        Ok(Value::Null)
    }

    async fn update(&self, id: &str, body: Value, query: QueryParams) -> ServiceResult<Value> {
        debug!(id = %id, body = %body, query = ?query, "placeholder update");
        Ok(Value::Null)
    }

    async fn delete(&self, id: &str, query: QueryParams) -> ServiceResult<Value> {
        debug!(id = %id, query = ?query, "placeholder delete");
        Ok(Value::Null)
    }

    async fn self_check(&self) -> ServiceResult<bool> {
        Ok(true)
    }
}
