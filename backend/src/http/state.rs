//! Application state for the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::SkyService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only sky service; nothing in it is mutated after startup
    pub sky: Arc<SkyService>,
    /// Directory holding `index.html` and the `/static` assets
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new application state with the given service.
    pub fn new(sky: SkyService, server: &ServerConfig) -> Self {
        Self {
            sky: Arc::new(sky),
            static_dir: server.static_dir.clone(),
        }
    }
}
