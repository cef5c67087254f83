//! Axum extractors for the CRUD API.
//!
//! - [`JsonPayload`] - Opaque JSON request body
//! - [`RequiredId`] - Non-blank `{id}` path segment

mod json_payload;
mod required_id;

pub use json_payload::{JsonPayload, JsonPayloadRejection};
pub use required_id::RequiredId;
