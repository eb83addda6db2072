//! Application state shared across handlers

use crate::autocomplete::SearchProvider;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Provider answering autocomplete queries
    pub provider: Arc<dyn SearchProvider>,
}

impl AppState {
    /// Create new application state
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }
}
