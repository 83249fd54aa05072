//! Publications resource routes, relative to the mount point.

use crate::handlers::publications::{delete, download, list, read, upload};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn publication_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(upload))
        .route("/:id", get(read).delete(delete))
        .route("/:id/download", get(download))
        .with_state(state)
}

/// The collection also answers at `<mount>/`, which nesting alone does not route.
pub fn collection_slash_routes(mount: &str, state: AppState) -> Router {
    Router::new()
        .route(&format!("{}/", mount), get(list).post(upload))
        .with_state(state)
}
