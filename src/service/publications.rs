//! Publication operations on top of a repository: validation and not-found translation.

use crate::content::{content_disposition, content_type_for};
use crate::error::AppError;
use crate::publication::{CreatedPublication, PublicationSummary, UploadRequest};
use crate::repository::PublicationRepository;
use crate::service::UploadValidator;
use std::sync::Arc;

/// A file ready to be streamed back: body plus the headers that describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub content_type: &'static str,
    pub content_disposition: String,
    pub content: Vec<u8>,
}

#[derive(Clone)]
pub struct PublicationService {
    repo: Arc<dyn PublicationRepository>,
}

impl PublicationService {
    pub fn new(repo: Arc<dyn PublicationRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<PublicationSummary>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<PublicationSummary, AppError> {
        self.repo.get(id).await?.ok_or_else(|| not_found(id))
    }

    /// Rows without content (NULL or zero-length blob) are reported as not found.
    pub async fn download(&self, id: i64) -> Result<Download, AppError> {
        let file = self.repo.file(id).await?.ok_or_else(|| not_found(id))?;
        let content = file
            .content
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::NotFound(format!("file of publication {}", id)))?;
        let filename = file.filename.unwrap_or_default();
        Ok(Download {
            content_type: content_type_for(&filename),
            content_disposition: content_disposition(&filename),
            content,
        })
    }

    pub async fn create(&self, req: UploadRequest) -> Result<CreatedPublication, AppError> {
        let publication = UploadValidator::validate(req)?;
        let title = publication.title.clone();
        let filename = publication.filename.clone();
        let size = publication.content.len();
        let id = self.repo.create(publication).await?;
        tracing::info!(id, %title, %filename, size, "publication created");
        Ok(CreatedPublication { id, title, filename })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(id, "publication deleted");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.repo.ping().await
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("publication {}", id))
}
