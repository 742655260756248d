//! Application state for the payroll API.

use std::sync::Arc;

use crate::config::{ConfigLoader, WageTable};

/// Shared application state.
///
/// Holds the wage table every request is priced against. It is read-only
/// once the server starts.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the active wage table.
    pub fn table(&self) -> &WageTable {
        self.config.table()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}
