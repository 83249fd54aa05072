//! Publication records as stored and as exposed over HTTP.

use serde::{Deserialize, Serialize};

/// Publication metadata. Never carries the blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PublicationSummary {
    pub id: i64,
    pub title: String,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub filename: Option<String>,
}

/// Stored file content of one publication, as returned by the download lookup.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PublicationFile {
    pub filename: Option<String>,
    #[sqlx(rename = "file_blob")]
    pub content: Option<Vec<u8>>,
}

/// A validated publication ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPublication {
    pub title: String,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub filename: String,
    pub content: Vec<u8>,
}

/// Upload body as sent by clients. Every field is optional here so that
/// missing fields surface as validation errors rather than JSON rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub filename: Option<String>,
    pub content_base64: Option<String>,
}

/// Response body of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPublication {
    pub id: i64,
    pub title: String,
    pub filename: String,
}
