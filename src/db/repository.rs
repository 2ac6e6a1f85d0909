//! Repository trait for abstracting calendar table lookups.
//!
//! This trait defines the four query shapes over the precomputed table,
//! allowing different storage backends (SQLite file, in-memory) to be
//! swapped via dependency injection.

use async_trait::async_trait;

use crate::models::CalendarEntry;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}

#[cfg(feature = "sqlite-repo")]
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => {
                RepositoryError::NotFound("Record not found".to_string())
            }
            other => RepositoryError::QueryError(other.to_string()),
        }
    }
}

/// Repository trait for calendar lookup operations.
///
/// The store is read-only: implementations answer the four query shapes and
/// never mutate data. Every operation is idempotent and safe to run
/// concurrently with any other read.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust and allow
/// sharing across threads.
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Check that the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store answers queries
    /// - `Ok(false)` if the store is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Exact-match lookup on the (year, month, day) key.
    ///
    /// Out-of-range values are not rejected; they simply fail to match.
    ///
    /// # Returns
    /// * `Ok(Some(CalendarEntry))` - The matching row
    /// * `Ok(None)` - If no row matches
    async fn find_by_hijri(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> RepositoryResult<Option<CalendarEntry>>;

    /// Exact-match lookup on the stored Gregorian string.
    ///
    /// The input is compared verbatim against stored values; no parsing or
    /// normalization is performed.
    ///
    /// # Returns
    /// * `Ok(Some(CalendarEntry))` - The matching row
    /// * `Ok(None)` - If no row matches
    async fn find_by_gregorian(&self, date: &str) -> RepositoryResult<Option<CalendarEntry>>;

    /// All entries for the given year and month, ordered by day ascending.
    ///
    /// # Returns
    /// * `Ok(Vec<CalendarEntry>)` - Matching rows in day order; empty if none exist
    async fn find_month(&self, year: i32, month: u32) -> RepositoryResult<Vec<CalendarEntry>>;

    /// All entries for the given year, ordered by (month, day) ascending.
    ///
    /// # Returns
    /// * `Ok(Vec<CalendarEntry>)` - Matching rows in (month, day) order; empty if none exist
    async fn find_year(&self, year: i32) -> RepositoryResult<Vec<CalendarEntry>>;
}
