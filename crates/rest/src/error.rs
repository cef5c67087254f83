//! Error types for the CRUD API.
//!
//! Handlers return [`RestResult`]; every failure path ends the request with
//! one of the responses below. Nothing is retried.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Body |
//! |-------|-------------|------|
//! | BadRequest | 400 | `{"message": "..."}` |
//! | NotFound | 404 | empty |
//! | InternalError | 500 | empty (details are logged) |
//!
//! Service errors are always mapped to `InternalError`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;
use utoipa::ToSchema;

use crate::service::ServiceError;

/// Message returned when a route's `{id}` segment is missing or blank.
pub const ID_REQUIRED_MESSAGE: &str = "id is required!";

/// JSON body of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    /// Human-readable description of the problem.
    #[schema(example = "id is required!")]
    pub message: String,
}

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Bad request, reported back to the client (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// No route matched (HTTP 404).
    NotFound {
        /// The request path.
        path: String,
    },

    /// Anything else that went wrong (HTTP 500).
    InternalError {
        /// Error message. Logged, never sent to the client.
        message: String,
    },
}

impl RestError {
    /// The 400 error for a missing or blank path identifier.
    pub fn id_required() -> Self {
        RestError::BadRequest {
            message: ID_REQUIRED_MESSAGE.to_string(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::NotFound { path } => {
                write!(f, "No route for {}", path)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        match self {
            RestError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, Json(ErrorMessage { message })).into_response()
            }
            RestError::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),
            RestError::InternalError { message } => {
                error!(error = %message, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<ServiceError> for RestError {
    fn from(err: ServiceError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
