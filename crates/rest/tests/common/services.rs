//! Service doubles for exercising the HTTP layer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use scaffold_rest::service::{QueryParams, ServiceError, ServiceResult, TestService};
use serde_json::{Value, json};

/// One call observed by [`RecordingService`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Operation name (create, read, read_one, update, delete).
    pub operation: &'static str,
    /// Path id, if the operation takes one.
    pub id: Option<String>,
    /// Request body, if the operation takes one.
    pub body: Option<Value>,
    /// Query parameters.
    pub query: QueryParams,
}

/// Records every call and answers with recognisable values.
#[derive(Debug, Clone, Default)]
pub struct RecordingService {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingService {
    /// Creates a new recording service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all calls recorded so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the single recorded call, panicking if there is not exactly one.
    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls.into_iter().next().unwrap()
    }

    fn record(
        &self,
        operation: &'static str,
        id: Option<&str>,
        body: Option<&Value>,
        query: &QueryParams,
    ) {
        self.calls.lock().unwrap().push(RecordedCall {
            operation,
            id: id.map(String::from),
            body: body.cloned(),
            query: query.clone(),
        });
    }
}

#[async_trait]
impl TestService for RecordingService {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn create(&self, body: Value, query: QueryParams) -> ServiceResult<Value> {
        self.record("create", None, Some(&body), &query);
        Ok(json!({ "created": body }))
    }

    async fn read(&self, query: QueryParams) -> ServiceResult<Value> {
        self.record("read", None, None, &query);
        Ok(json!([{ "id": "1" }, { "id": "2" }]))
    }

    async fn read_one(&self, id: &str, query: QueryParams) -> ServiceResult<Value> {
        self.record("read_one", Some(id), None, &query);
        Ok(json!({ "id": id }))
    }

    async fn update(&self, id: &str, body: Value, query: QueryParams) -> ServiceResult<Value> {
        self.record("update", Some(id), Some(&body), &query);
        Ok(json!({ "id": id, "updated": body }))
    }

    async fn delete(&self, id: &str, query: QueryParams) -> ServiceResult<Value> {
        self.record("delete", Some(id), None, &query);
        Ok(json!({ "deleted": id }))
    }

    async fn self_check(&self) -> ServiceResult<bool> {
        Ok(true)
    }
}

/// Fails every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingService;

fn failure(operation: &str) -> ServiceError {
    ServiceError::Internal {
        message: format!("{} exploded", operation),
    }
}

#[async_trait]
impl TestService for FailingService {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn create(&self, _body: Value, _query: QueryParams) -> ServiceResult<Value> {
        Err(failure("create"))
    }

    async fn read(&self, _query: QueryParams) -> ServiceResult<Value> {
        Err(failure("read"))
    }

    async fn read_one(&self, _id: &str, _query: QueryParams) -> ServiceResult<Value> {
        Err(failure("read_one"))
    }

    async fn update(&self, _id: &str, _body: Value, _query: QueryParams) -> ServiceResult<Value> {
        Err(anyhow::anyhow!("update exploded").into())
    }

    async fn delete(&self, _id: &str, _query: QueryParams) -> ServiceResult<Value> {
        Err(ServiceError::NotImplemented {
            operation: "delete".to_string(),
        })
    }

    async fn self_check(&self) -> ServiceResult<bool> {
        Err(failure("self_check"))
    }
}

/// Succeeds at everything but reports itself unhealthy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnhealthyService;

#[async_trait]
impl TestService for UnhealthyService {
    fn name(&self) -> &'static str {
        "unhealthy"
    }

    async fn create(&self, _body: Value, _query: QueryParams) -> ServiceResult<Value> {
        Ok(Value::Null)
    }

    async fn read(&self, _query: QueryParams) -> ServiceResult<Value> {
        Ok(Value::Null)
    }

    async fn read_one(&self, _id: &str, _query: QueryParams) -> ServiceResult<Value> {
        Ok(Value::Null)
    }

    async fn update(&self, _id: &str, _body: Value, _query: QueryParams) -> ServiceResult<Value> {
        Ok(Value::Null)
    }

    async fn delete(&self, _id: &str, _query: QueryParams) -> ServiceResult<Value> {
        Ok(Value::Null)
    }

    async fn self_check(&self) -> ServiceResult<bool> {
        Ok(false)
    }
}

/// Panics in every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanickingService;

#[async_trait]
impl TestService for PanickingService {
    fn name(&self) -> &'static str {
        "panicking"
    }

    async fn create(&self, _body: Value, _query: QueryParams) -> ServiceResult<Value> {
        panic!("create panicked")
    }

    async fn read(&self, _query: QueryParams) -> ServiceResult<Value> {
        panic!("read panicked")
    }

    async fn read_one(&self, _id: &str, _query: QueryParams) -> ServiceResult<Value> {
        panic!("read_one panicked")
    }

    async fn update(&self, _id: &str, _body: Value, _query: QueryParams) -> ServiceResult<Value> {
        panic!("update panicked")
    }

    async fn delete(&self, _id: &str, _query: QueryParams) -> ServiceResult<Value> {
        panic!("delete panicked")
    }

    async fn self_check(&self) -> ServiceResult<bool> {
        panic!("self_check panicked")
    }
}

/// Sleeps before answering every list request.
#[derive(Debug, Clone, Copy)]
pub struct SlowService {
    /// How long `read` takes.
    pub delay: Duration,
}

#[async_trait]
impl TestService for SlowService {
    fn name(&self) -> &'static str {
        "slow"
    }

    async fn create(&self, _body: Value, _query: QueryParams) -> ServiceResult<Value> {
        Ok(Value::Null)
    }

    async fn read(&self, _query: QueryParams) -> ServiceResult<Value> {
        tokio::time::sleep(self.delay).await;
        Ok(json!([]))
    }

    async fn read_one(&self, _id: &str, _query: QueryParams) -> ServiceResult<Value> {
        Ok(Value::Null)
    }

    async fn update(&self, _id: &str, _body: Value, _query: QueryParams) -> ServiceResult<Value> {
        Ok(Value::Null)
    }

    async fn delete(&self, _id: &str, _query: QueryParams) -> ServiceResult<Value> {
        Ok(Value::Null)
    }

    async fn self_check(&self) -> ServiceResult<bool> {
        Ok(true)
    }
}
