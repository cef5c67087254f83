//! REST API test harness.
//!
//! Provides infrastructure for testing the REST API endpoints.

use axum_test::{TestResponse, TestServer};
use scaffold_rest::{ServerConfig, TestService, create_app_with_config};
use serde_json::Value;

/// Test harness for REST API testing.
///
/// Wraps an in-process [`TestServer`] running the full application
/// (middleware included) with the given service.
///
/// # Example
///
/// ```rust,ignore
/// let harness = RestTestHarness::new(RecordingService::new());
///
/// let response = harness.get("/api/test/1").await;
///
/// assert_eq!(response.status_code(), 200);
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Creates a new test harness with the testing configuration.
    pub fn new<S>(service: S) -> Self
    where
        S: TestService + 'static,
    {
        Self::with_config(service, ServerConfig::for_testing())
    }

    /// Creates a new test harness with a custom configuration.
    pub fn with_config<S>(service: S, config: ServerConfig) -> Self
    where
        S: TestService + 'static,
    {
        let app = create_app_with_config(service, config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, config }
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server.post(path).json(&body).await
    }

    /// Makes a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.server.put(path).json(&body).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(path).await
    }
}
