//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::CalendarRepository;

/// Shared application state passed to all handlers.
///
/// Holds only `Arc`s; the API key is set once at startup and no handler
/// mutates anything through this state.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for calendar lookups
    pub repository: Arc<dyn CalendarRepository>,
    /// Configured shared secret for the private endpoints
    pub api_key: Arc<str>,
}

impl AppState {
    /// Create a new application state with the given repository and API key.
    pub fn new(repository: Arc<dyn CalendarRepository>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            repository,
            api_key: api_key.into(),
        }
    }
}
