//! JSON payload extractor.
//!
//! Extracts the request body as an opaque JSON value, the way a JSON body
//! parser middleware would leave it on the request.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::error::RestError;

/// Axum extractor for opaque JSON request bodies.
///
/// - A request whose `Content-Type` is not JSON yields an empty object.
/// - An empty JSON body yields an empty object.
/// - Anything other than a JSON object or array is rejected with 400.
///
/// # Example
///
/// ```rust,ignore
/// use scaffold_rest::extractors::JsonPayload;
///
/// async fn create_handler(JsonPayload(body): JsonPayload) {
///     println!("Received: {}", body);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPayload(pub Value);

impl JsonPayload {
    /// Consumes the extractor and returns the inner Value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Default for JsonPayload {
    fn default() -> Self {
        JsonPayload(Value::Object(serde_json::Map::new()))
    }
}

/// Error type for JSON payload extraction failures.
#[derive(Debug)]
pub enum JsonPayloadRejection {
    /// The body is not valid JSON, or not an object or array.
    InvalidJson(String),
    /// The body could not be read (e.g. it exceeds the size limit).
    Body(BytesRejection),
}

impl IntoResponse for JsonPayloadRejection {
    fn into_response(self) -> Response {
        match self {
            JsonPayloadRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid JSON: {}", msg),
            }
            .into_response(),
            JsonPayloadRejection::Body(rejection) => rejection.into_response(),
        }
    }
}

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = JsonPayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(JsonPayload::default());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(JsonPayloadRejection::Body)?;

        parse_payload(&bytes)
    }
}

/// Returns true for `application/json` and any `+json` media type.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .is_some_and(|m| {
            m.type_() == mime::APPLICATION
                && (m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
        })
}

fn parse_payload(bytes: &[u8]) -> Result<JsonPayload, JsonPayloadRejection> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonPayload::default());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| JsonPayloadRejection::InvalidJson(e.to_string()))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(JsonPayload(value)),
        other => Err(JsonPayloadRejection::InvalidJson(format!(
            "expected an object or array, got {}",
            other
        ))),
    }
}
