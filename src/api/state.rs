//! Application state for the attendance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::EngineStore;

/// Shared application state.
///
/// Holds the store every handler queries. Any [`EngineStore`]
/// implementation can back the API; a loaded data directory is the usual one.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EngineStore>,
}

impl AppState {
    /// Creates application state from a loaded data directory.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config.into_store())
    }

    /// Creates application state over any store implementation.
    pub fn with_store<S>(store: S) -> Self
    where
        S: EngineStore + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns the store.
    pub fn store(&self) -> &dyn EngineStore {
        self.store.as_ref()
    }
}
