//! NDC publications: REST catalog of uploaded documents stored as SQLite blobs.

pub mod config;
pub mod content;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod publication;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use publication::{CreatedPublication, NewPublication, PublicationSummary, UploadRequest};
pub use repository::{
    InMemoryPublicationRepository, PublicationRepository, SqlitePublicationRepository,
};
pub use routes::{app, common_routes, common_routes_with_ready, publication_routes};
pub use service::PublicationService;
pub use state::AppState;
pub use store::{connect, ensure_tables};
