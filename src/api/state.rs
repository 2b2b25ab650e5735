//! Application state for the Productivity Impact API.
//!
//! Calculations are stateless; the shared state only carries the loaded
//! configuration used to answer `/defaults`.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calculator configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
