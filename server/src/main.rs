//! Publications server: reads config from the environment (and `.env`), prepares the
//! SQLite schema, and serves the publications API.

use anyhow::Context;
use ndc_publications::{
    app, connect, ensure_tables, AppConfig, AppState, SqlitePublicationRepository,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ndc_publications=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let pool = connect(&config).await.context("failed to open database")?;
    ensure_tables(&pool).await.context("failed to create tables")?;

    let state = AppState::new(Arc::new(SqlitePublicationRepository::new(pool)));
    let router = app(state, &config);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        publications = %config.publications_path,
        "listening"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
