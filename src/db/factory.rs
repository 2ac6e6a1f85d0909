//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating repository instances based on
//! runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
use super::repositories::SqliteRepository;
use super::repository::{CalendarRepository, RepositoryError, RepositoryResult};
use crate::config::AppConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Read-only SQLite file implementation
    Sqlite,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("sqlite", "local")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" | "sql" => Ok(Self::Sqlite),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variables.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Sqlite when the backend is
    /// compiled in, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if cfg!(feature = "sqlite-repo") {
            Self::Sqlite
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use bohra_calendar::db::{RepositoryFactory, RepositoryType};
///
/// let repo = RepositoryFactory::create(
///     RepositoryType::Sqlite,
///     Some(std::path::Path::new("data/Bohra_Calendar_5300AH.sqlite")),
/// )?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `database_path` - Database file location (required for Sqlite)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn CalendarRepository>)` - Boxed repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn create(
        repo_type: RepositoryType,
        database_path: Option<&Path>,
    ) -> RepositoryResult<Arc<dyn CalendarRepository>> {
        match repo_type {
            RepositoryType::Sqlite => {
                #[cfg(feature = "sqlite-repo")]
                {
                    let path = database_path.ok_or_else(|| {
                        RepositoryError::ConfigurationError(
                            "Sqlite repository requires a database path".to_string(),
                        )
                    })?;
                    let repo = Self::create_sqlite(path)?;
                    Ok(repo as Arc<dyn CalendarRepository>)
                }
                #[cfg(not(feature = "sqlite-repo"))]
                {
                    let _ = database_path;
                    Err(RepositoryError::ConfigurationError(
                        "Sqlite repository feature not enabled".to_string(),
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a SQLite repository for the given database file.
    ///
    /// # Errors
    /// Fails if the file does not exist.
    #[cfg(feature = "sqlite-repo")]
    pub fn create_sqlite<P: AsRef<Path>>(path: P) -> RepositoryResult<Arc<SqliteRepository>> {
        let repo = SqliteRepository::open(path)?;
        Ok(Arc::new(repo))
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn CalendarRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a repository from application configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration naming the backend and database path
    pub fn from_config(config: &AppConfig) -> RepositoryResult<Arc<dyn CalendarRepository>> {
        let repo_type: RepositoryType = config
            .repository_type
            .parse()
            .map_err(RepositoryError::ConfigurationError)?;

        Self::create(repo_type, Some(&config.database_path))
    }

    /// Create a repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` to determine the backend and
    /// `CALENDAR_DB_PATH` for the table location, falling back to the
    /// default path.
    pub fn from_env() -> RepositoryResult<Arc<dyn CalendarRepository>> {
        match RepositoryType::from_env() {
            RepositoryType::Sqlite => {
                let path = std::env::var("CALENDAR_DB_PATH")
                    .unwrap_or_else(|_| crate::config::DEFAULT_DB_PATH.to_string());
                Self::create(RepositoryType::Sqlite, Some(Path::new(&path)))
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }
}
