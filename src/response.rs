//! Response helpers for JSON bodies and file attachments.

use crate::error::AppError;
use crate::service::Download;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// Raw file body with `Content-Type` and an attachment `Content-Disposition`.
pub fn attachment(download: Download) -> Result<Response, AppError> {
    let disposition = HeaderValue::from_str(&download.content_disposition)
        .map_err(|e| AppError::Internal(format!("content-disposition header: {}", e)))?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(download.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.content,
    )
        .into_response())
}
