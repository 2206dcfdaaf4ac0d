//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::ResponseRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn ResponseRepository>,
    /// Shared secret gating the CSV export endpoint; `None` denies export.
    pub admin_token: Option<String>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(repository: Arc<dyn ResponseRepository>, admin_token: Option<String>) -> Self {
        Self {
            repository,
            admin_token,
        }
    }
}
