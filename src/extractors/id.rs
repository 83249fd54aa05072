//! Extract a publication id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Numeric publication id. Segments that are not integers cannot match a row,
/// so they are rejected as not found rather than as bad requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicationId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PublicationId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Internal(format!("id path extraction: {}", e)))?;
        raw.trim()
            .parse::<i64>()
            .map(PublicationId)
            .map_err(|_| AppError::NotFound(format!("publication {}", raw)))
    }
}
