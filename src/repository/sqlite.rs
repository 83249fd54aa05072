//! Publications backed by the SQLite `publications` table.

use crate::error::AppError;
use crate::publication::{NewPublication, PublicationFile, PublicationSummary};
use crate::repository::PublicationRepository;
use async_trait::async_trait;
use sqlx::SqlitePool;

const LIST_SQL: &str = "SELECT id, title, date, summary, filename FROM publications \
     ORDER BY date IS NULL, date DESC, id DESC";
const GET_SQL: &str = "SELECT id, title, date, summary, filename FROM publications WHERE id = ?";
const FILE_SQL: &str = "SELECT filename, file_blob FROM publications WHERE id = ?";
const INSERT_SQL: &str =
    "INSERT INTO publications (title, date, summary, filename, file_blob) VALUES (?, ?, ?, ?, ?)";
const DELETE_SQL: &str = "DELETE FROM publications WHERE id = ?";

#[derive(Clone)]
pub struct SqlitePublicationRepository {
    pool: SqlitePool,
}

impl SqlitePublicationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PublicationRepository for SqlitePublicationRepository {
    async fn list(&self) -> Result<Vec<PublicationSummary>, AppError> {
        tracing::debug!(sql = %LIST_SQL, "query");
        let rows = sqlx::query_as::<_, PublicationSummary>(LIST_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<PublicationSummary>, AppError> {
        tracing::debug!(sql = %GET_SQL, id, "query");
        let row = sqlx::query_as::<_, PublicationSummary>(GET_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn file(&self, id: i64) -> Result<Option<PublicationFile>, AppError> {
        tracing::debug!(sql = %FILE_SQL, id, "query");
        let row = sqlx::query_as::<_, PublicationFile>(FILE_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, publication: NewPublication) -> Result<i64, AppError> {
        tracing::debug!(
            sql = %INSERT_SQL,
            title = %publication.title,
            bytes = publication.content.len(),
            "query"
        );
        let result = sqlx::query(INSERT_SQL)
            .bind(&publication.title)
            .bind(&publication.date)
            .bind(&publication.summary)
            .bind(&publication.filename)
            .bind(&publication.content)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE_SQL, id, "query");
        let result = sqlx::query(DELETE_SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
