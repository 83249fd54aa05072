//! Shared application state for all routes.

use crate::repository::PublicationRepository;
use crate::service::PublicationService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub publications: PublicationService,
}

impl AppState {
    pub fn new(repo: Arc<dyn PublicationRepository>) -> Self {
        Self {
            publications: PublicationService::new(repo),
        }
    }
}
