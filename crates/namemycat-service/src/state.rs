//! Application state.

use std::sync::Arc;

use namemycat_store::NameStore;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend. Handlers open one session per request.
    pub store: Arc<dyn NameStore>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn NameStore>, config: ServiceConfig) -> Self {
        if config.uses_default_secret() {
            tracing::warn!("APP_SECRET not set - flash cookies are signed with the default key");
        }

        Self { store, config }
    }
}
