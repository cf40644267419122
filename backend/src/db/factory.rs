//! Repository factory for dependency injection.
//!
//! Creates repository instances from runtime configuration.

use log::info;
use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{RepositoryError, RepositoryResult, StatisticsRepository};
use super::services;
use crate::config::AppConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

/// Centralized creation of repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    pub fn create(repo_type: RepositoryType) -> Arc<dyn StatisticsRepository> {
        match repo_type {
            RepositoryType::Local => Self::create_local(),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn StatisticsRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create the configured repository and load its seed file, if any.
    ///
    /// # Errors
    /// * `ConfigurationError` if the repository type is unknown
    /// * any error from loading the seed file
    pub async fn from_config(config: &AppConfig) -> RepositoryResult<Arc<dyn StatisticsRepository>> {
        let repo_type = config
            .repository_type()
            .map_err(|e| RepositoryError::configuration(format!("Invalid repository type: {}", e)))?;

        let repo = Self::create(repo_type);
        info!("Created {:?} repository", repo_type);

        if let Some(seed_file) = &config.repository.seed_file {
            services::load_seed_file(repo.as_ref(), seed_file).await?;
        }

        Ok(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repository_type() {
        assert_eq!("local".parse::<RepositoryType>(), Ok(RepositoryType::Local));
        assert_eq!("LOCAL".parse::<RepositoryType>(), Ok(RepositoryType::Local));
        assert!("postgres".parse::<RepositoryType>().is_err());
    }

    #[tokio::test]
    async fn test_from_config_without_seed() {
        let repo = RepositoryFactory::from_config(&AppConfig::default())
            .await
            .unwrap();
        assert!(repo.list_categories().await.unwrap().is_empty());
        assert!(repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_from_config_rejects_unknown_type() {
        let mut config = AppConfig::default();
        config.repository.repo_type = "azure".to_string();

        let result = RepositoryFactory::from_config(&config).await;
        assert!(matches!(
            result,
            Err(RepositoryError::ConfigurationError { .. })
        ));
    }
}
