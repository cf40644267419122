//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::StatisticsRepository;
use crate::services::DEFAULT_MAX_MONTHS;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for statistics storage
    pub repository: Arc<dyn StatisticsRepository>,
    /// Longest chart timeline handlers will compute
    pub max_months: usize,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn StatisticsRepository>) -> Self {
        Self {
            repository,
            max_months: DEFAULT_MAX_MONTHS,
        }
    }

    /// Override the chart timeline limit.
    pub fn with_max_months(mut self, max_months: usize) -> Self {
        self.max_months = max_months;
        self
    }
}
