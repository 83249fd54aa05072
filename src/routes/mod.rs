//! Router assembly.

mod common;
mod publications;

pub use common::{common_routes, common_routes_with_ready};
pub use publications::{collection_slash_routes, publication_routes};

use crate::config::AppConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root, publications under `config.publications_path`.
///
/// The upload cap is enforced by the body extractor, so oversized requests surface as
/// `AppError::PayloadTooLarge` with the JSON error body whether or not `Content-Length` is sent.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(collection_slash_routes(&config.publications_path, state.clone()))
        .nest(&config.publications_path, publication_routes(state))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
}
