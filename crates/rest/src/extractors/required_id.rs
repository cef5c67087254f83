//! Path identifier extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// Axum extractor for a required `{id}` path segment.
///
/// Rejects with 400 `{"message": "id is required!"}` when the decoded
/// segment is empty or only whitespace. The id itself is passed on untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredId(pub String);

impl RequiredId {
    /// Returns the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RequiredId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::id_required())?;

        if id.trim().is_empty() {
            return Err(RestError::id_required());
        }

        Ok(RequiredId(id))
    }
}
