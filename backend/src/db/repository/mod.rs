//! Repository trait for statistics storage.
//!
//! - [`error`]: Error types for repository operations

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::models::{CategorySeries, Observation};

/// Storage for raw per-category monthly statistics.
///
/// Implementations hold the sparse observations exactly as received; gap
/// filling happens in the service layer on every read.
#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    /// Replace all observations of `category`, creating it if needed.
    async fn store_category(
        &self,
        category: &str,
        observations: Vec<Observation>,
    ) -> RepositoryResult<()>;

    /// All stored categories with their observations.
    async fn fetch_statistics(&self) -> RepositoryResult<CategorySeries>;

    /// Stored category names, sorted.
    async fn list_categories(&self) -> RepositoryResult<Vec<String>>;

    /// Remove a category. Fails with `NotFound` if it does not exist.
    async fn delete_category(&self, category: &str) -> RepositoryResult<()>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
