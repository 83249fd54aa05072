//! SQLite pool setup and idempotent table creation.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub const PUBLICATIONS_TABLE: &str = "publications";

/// Open a pool for `config.database_url`. The database file is created when missing.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    tracing::info!(url = %config.database_url, "database pool ready");
    Ok(pool)
}

/// Create the publications table and its date index if they do not exist.
/// AUTOINCREMENT keeps ids of deleted rows from being handed out again.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            date TEXT,
            summary TEXT,
            filename TEXT,
            file_blob BLOB
        )
        "#,
        PUBLICATIONS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_{0}_date ON {0} (date)",
        PUBLICATIONS_TABLE
    ))
    .execute(pool)
    .await?;
    Ok(())
}
