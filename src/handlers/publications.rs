//! Publication handlers: list, read, download, upload, delete.

use crate::error::AppError;
use crate::extractors::PublicationId;
use crate::publication::UploadRequest;
use crate::response::{attachment, created, ok};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET / — metadata of every publication, newest first.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.publications.list().await?;
    Ok(ok(rows))
}

/// GET /:id — metadata of one publication.
pub async fn read(
    State(state): State<AppState>,
    PublicationId(id): PublicationId,
) -> Result<impl IntoResponse, AppError> {
    let row = state.publications.get(id).await?;
    Ok(ok(row))
}

/// GET /:id/download — the stored file as an attachment.
pub async fn download(
    State(state): State<AppState>,
    PublicationId(id): PublicationId,
) -> Result<impl IntoResponse, AppError> {
    let file = state.publications.download(id).await?;
    attachment(file)
}

/// POST / — upload a publication from a JSON body with base64 content.
pub async fn upload(
    State(state): State<AppState>,
    payload: Result<Json<UploadRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(reject_body)?;
    let row = state.publications.create(req).await?;
    Ok(created(row))
}

/// DELETE /:id — remove a publication and its file.
pub async fn delete(
    State(state): State<AppState>,
    PublicationId(id): PublicationId,
) -> Result<impl IntoResponse, AppError> {
    state.publications.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn reject_body(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::Validation(rejection.body_text())
    }
}
