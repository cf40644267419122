//! High-level repository service layer.
//!
//! Repository-agnostic operations that work with any
//! [`StatisticsRepository`]. Validation lives here so every backend stores
//! the same well-formed data.
//!
//! # Usage
//!
//! ```no_run
//! use collab_stats::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     services::load_seed_file(&repo, "statistics.json").await?;
//!
//!     let categories = services::list_categories(&repo).await?;
//!     println!("Found {} categories", categories.len());
//!     Ok(())
//! }
//! ```

use log::{info, warn};
use std::path::Path;

use super::repository::{ErrorContext, RepositoryError, RepositoryResult, StatisticsRepository};
use crate::models::{CategorySeries, Observation};
use crate::services::{validate_observations, RESERVED_CATEGORY};

fn check_category(category: &str, observations: &[Observation]) -> RepositoryResult<()> {
    let context = || {
        ErrorContext::new("store_category")
            .with_entity("category")
            .with_entity_id(category)
    };

    if category.trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "Category name must not be empty",
            context(),
        ));
    }
    if category == RESERVED_CATEGORY {
        return Err(RepositoryError::validation_with_context(
            format!("Category name '{}' is reserved", category),
            context(),
        ));
    }

    validate_observations(category, observations)
        .map_err(|e| RepositoryError::validation_with_context(e.to_string(), context()))
}

/// Validate and store the observations of one category, replacing any
/// previous ones.
pub async fn store_category(
    repo: &dyn StatisticsRepository,
    category: &str,
    observations: Vec<Observation>,
) -> RepositoryResult<()> {
    check_category(category, &observations)?;
    repo.store_category(category, observations).await
}

/// Validate and store every category of `series`.
///
/// Validation covers all categories before anything is written. Writes are
/// not transactional: if the repository fails partway, categories stored
/// before the failure stay stored.
pub async fn store_statistics(
    repo: &dyn StatisticsRepository,
    series: CategorySeries,
) -> RepositoryResult<usize> {
    for (category, observations) in &series {
        check_category(category, observations)?;
    }

    let total = series.len();
    for (category, observations) in series {
        repo.store_category(&category, observations).await?;
    }
    Ok(total)
}

/// Load a JSON statistics payload (`{category: [{year, month, count}]}`) from
/// disk into the repository. Returns the number of categories stored.
pub async fn load_seed_file<P: AsRef<Path>>(
    repo: &dyn StatisticsRepository,
    path: P,
) -> RepositoryResult<usize> {
    let path = path.as_ref();
    let context = || ErrorContext::new("load_seed_file").with_details(path.display().to_string());

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        RepositoryError::internal_with_context(format!("Failed to read seed file: {}", e), context())
    })?;

    let series: CategorySeries = serde_json::from_str(&content).map_err(|e| {
        RepositoryError::validation_with_context(
            format!("Failed to parse seed file: {}", e),
            context(),
        )
    })?;

    if series.is_empty() {
        warn!("Seed file {} contains no categories", path.display());
    }

    let stored = store_statistics(repo, series).await?;
    info!("Loaded {} categories from {}", stored, path.display());
    Ok(stored)
}

pub async fn fetch_statistics(repo: &dyn StatisticsRepository) -> RepositoryResult<CategorySeries> {
    repo.fetch_statistics().await
}

pub async fn list_categories(repo: &dyn StatisticsRepository) -> RepositoryResult<Vec<String>> {
    repo.list_categories().await
}

pub async fn delete_category(repo: &dyn StatisticsRepository, category: &str) -> RepositoryResult<()> {
    repo.delete_category(category).await?;
    info!("Deleted category '{}'", category);
    Ok(())
}

/// Check repository connectivity.
pub async fn health_check(repo: &dyn StatisticsRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
