//! Application state for the Shift Roster Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RosterConfig;
use crate::store::RosterStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// roster store and the engine configuration.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RosterStore>,
    config: Arc<RosterConfig>,
}

impl AppState {
    /// Creates a new application state over the given store and configuration.
    pub fn new(store: Arc<dyn RosterStore>, config: RosterConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns the roster store.
    pub fn store(&self) -> &dyn RosterStore {
        self.store.as_ref()
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }
}
