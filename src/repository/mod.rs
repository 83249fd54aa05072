//! Storage access for publications. Handlers only see the trait; the SQLite and
//! in-memory implementations are interchangeable.

mod memory;
mod sqlite;

pub use memory::InMemoryPublicationRepository;
pub use sqlite::SqlitePublicationRepository;

use crate::error::AppError;
use crate::publication::{NewPublication, PublicationFile, PublicationSummary};
use async_trait::async_trait;

/// Absence is reported as `None`/`false`; only storage failures are errors.
#[async_trait]
pub trait PublicationRepository: Send + Sync {
    /// All publications, newest `date` first, rows without a date last, ties by descending id.
    async fn list(&self) -> Result<Vec<PublicationSummary>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<PublicationSummary>, AppError>;

    /// Filename and blob of one publication.
    async fn file(&self, id: i64) -> Result<Option<PublicationFile>, AppError>;

    /// Insert and return the generated id.
    async fn create(&self, publication: NewPublication) -> Result<i64, AppError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap round trip to the backing store, used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
