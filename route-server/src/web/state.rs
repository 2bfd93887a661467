//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::planner::SearchConfig;
use crate::suggest::Suggester;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Airport and route catalog
    pub catalog: Arc<Catalog>,

    /// Path finder configuration
    pub config: Arc<SearchConfig>,

    /// Optional route suggestion source
    pub suggester: Option<Arc<dyn Suggester>>,
}

impl AppState {
    /// Create a new app state without suggestions.
    pub fn new(catalog: Catalog, config: SearchConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            suggester: None,
        }
    }

    /// Attach a suggestion source.
    pub fn with_suggester(mut self, suggester: impl Suggester + 'static) -> Self {
        self.suggester = Some(Arc::new(suggester));
        self
    }
}
