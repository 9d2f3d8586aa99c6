//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::AddressStorage;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// storage adapter and configuration. Handlers keep no request-scoped state
/// of their own.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    storage: AddressStorage,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, storage: AddressStorage) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, storage }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the address storage adapter.
    #[must_use]
    pub fn storage(&self) -> &AddressStorage {
        &self.inner.storage
    }
}
