//! In-memory local repository implementation.
//!
//! Stores statistics in a `BTreeMap` behind a lock, providing fast,
//! deterministic and isolated execution for tests and local development.

use async_trait::async_trait;
use log::info;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::{CategorySeries, Observation};

/// In-memory local repository.
///
/// Cloning shares the underlying data.
///
/// # Example
/// ```
/// use collab_stats::db::repositories::LocalRepository;
/// use collab_stats::db::repository::StatisticsRepository;
/// use collab_stats::models::Observation;
///
/// # #[tokio::main]
/// # async fn main() {
/// let repo = LocalRepository::new();
/// repo.store_category("users", vec![Observation::new(2023, 1, 5)])
///     .await
///     .unwrap();
///
/// let categories = repo.list_categories().await.unwrap();
/// assert_eq!(categories, vec!["users".to_string()]);
/// # }
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    statistics: CategorySeries,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            statistics: CategorySeries::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the backing store going away.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    fn ensure_healthy(&self, operation: &str) -> RepositoryResult<()> {
        if self.data.read().is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection_with_context(
                "Local repository is unavailable",
                ErrorContext::new(operation),
            ))
        }
    }
}

#[async_trait]
impl StatisticsRepository for LocalRepository {
    async fn store_category(
        &self,
        category: &str,
        observations: Vec<Observation>,
    ) -> RepositoryResult<()> {
        self.ensure_healthy("store_category")?;

        let count = observations.len();
        self.data
            .write()
            .statistics
            .insert(category.to_string(), observations);
        info!("Stored {} observations for category '{}'", count, category);
        Ok(())
    }

    async fn fetch_statistics(&self) -> RepositoryResult<CategorySeries> {
        self.ensure_healthy("fetch_statistics")?;
        Ok(self.data.read().statistics.clone())
    }

    async fn list_categories(&self) -> RepositoryResult<Vec<String>> {
        self.ensure_healthy("list_categories")?;
        Ok(self.data.read().statistics.keys().cloned().collect())
    }

    async fn delete_category(&self, category: &str) -> RepositoryResult<()> {
        self.ensure_healthy("delete_category")?;

        match self.data.write().statistics.remove(category) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::not_found_with_context(
                format!("Category '{}' not found", category),
                ErrorContext::new("delete_category")
                    .with_entity("category")
                    .with_entity_id(category),
            )),
        }
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }
}
