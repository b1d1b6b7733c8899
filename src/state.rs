//! Shared application state.

use std::sync::Arc;

use crate::api::middleware::AdminCredentials;
use crate::application::match_worker::MatchQueue;
use crate::application::services::{CatalogService, LinkService};
use crate::infrastructure::StorageBackend;

/// State injected into every handler.
///
/// Cheap to clone: everything is behind an `Arc` or is a channel handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub catalog_service: Arc<CatalogService>,
    pub match_queue: MatchQueue,
    pub storage: StorageBackend,
    pub admin: AdminCredentials,
}

impl AppState {
    /// Wires the services onto `storage`.
    pub fn new(storage: StorageBackend, match_queue: MatchQueue, admin: AdminCredentials) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(storage.link_repository())),
            catalog_service: Arc::new(CatalogService::new(storage.book_repository())),
            match_queue,
            storage,
            admin,
        }
    }
}
