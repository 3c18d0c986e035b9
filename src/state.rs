use crate::config::{self, ServerConfig};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Why a batch of `len` documents is refused, if it is.
    pub fn batch_rejection(&self, len: usize) -> Option<String> {
        config::batch_rejection(len, self.config.max_batch_size)
    }
}
