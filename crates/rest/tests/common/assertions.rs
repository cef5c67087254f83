//! HTTP response assertions.
//!
//! Provides assertion utilities for testing HTTP responses.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the response body is empty.
pub fn assert_empty_body(response: &TestResponse) {
    let body = response.as_bytes();
    assert!(
        body.is_empty(),
        "Expected empty body, got {:?}",
        String::from_utf8_lossy(body)
    );
}

/// Asserts a bare 500: the status and nothing else.
pub fn assert_bare_internal_error(response: &TestResponse) {
    assert_status(response, 500);
    assert_empty_body(response);
}

/// Asserts a bare 404.
pub fn assert_bare_not_found(response: &TestResponse) {
    assert_status(response, 404);
    assert_empty_body(response);
}

/// Asserts a 400 with the given `message` in the JSON body.
pub fn assert_bad_request(response: &TestResponse, message: &str) {
    assert_status(response, 400);
    let body: Value = response.json();
    assert_eq!(
        body.get("message").and_then(|v| v.as_str()),
        Some(message),
        "Unexpected 400 body: {}",
        body
    );
}
