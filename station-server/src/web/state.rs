//! Application state for the web layer.

use std::sync::Arc;

use crate::search::SearchConfig;
use crate::stations::StationStore;

/// Shared application state.
///
/// Contains everything needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station directory
    pub stations: StationStore,

    /// Search request limits
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationStore, config: SearchConfig) -> Self {
        Self {
            stations,
            config: Arc::new(config),
        }
    }
}
