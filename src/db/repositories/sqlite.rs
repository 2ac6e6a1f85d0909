//! Read-only SQLite repository over the precomputed `hijri_simple` table.
//!
//! The table is populated once by an external loading process; this backend
//! only ever reads it. Every operation opens its own read-only connection on
//! a blocking thread and drops it before returning, so no connection
//! outlives a single request.

use async_trait::async_trait;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::db::repository::{CalendarRepository, RepositoryError, RepositoryResult};
use crate::models::CalendarEntry;

/// SQLite-backed calendar repository.
///
/// Holds only the database path; connections are opened per operation.
#[derive(Clone)]
pub struct SqliteRepository {
    path: Arc<PathBuf>,
}

impl SqliteRepository {
    /// Create a repository for the given database file.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the file does not exist. The service
    /// never creates the table itself.
    pub fn open<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(RepositoryError::ConfigurationError(format!(
                "Calendar database not found at {}",
                path.display()
            )));
        }

        Ok(Self {
            path: Arc::new(path),
        })
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(path: &Path) -> RepositoryResult<Connection> {
        Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| RepositoryError::ConnectionError(e.to_string()))
    }

    /// Run `op` against a fresh read-only connection on a blocking thread.
    ///
    /// The connection is scoped to the closure and released unconditionally
    /// when it returns, on the error path included.
    async fn with_connection<T, F>(&self, op: F) -> RepositoryResult<T>
    where
        F: FnOnce(&Connection) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            let conn = Self::connect(&path)?;
            op(&conn)
        })
        .await
        .map_err(|e| RepositoryError::InternalError(format!("Blocking task join error: {}", e)))?
    }
}

fn entry_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CalendarEntry> {
    Ok(CalendarEntry {
        year: row.get("year")?,
        month: row.get("month")?,
        day: row.get("day")?,
        gregorian: row.get("gregorian")?,
    })
}

#[async_trait]
impl CalendarRepository for SqliteRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_connection(|conn| {
            conn.query_row("SELECT COUNT(*) FROM hijri_simple", [], |row| {
                row.get::<_, i64>(0)
            })?;
            Ok(true)
        })
        .await
    }

    async fn find_by_hijri(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> RepositoryResult<Option<CalendarEntry>> {
        self.with_connection(move |conn| {
            let entry = conn
                .query_row(
                    "SELECT year, month, day, gregorian \
                     FROM hijri_simple \
                     WHERE year = ?1 AND month = ?2 AND day = ?3",
                    params![year, month, day],
                    entry_from_row,
                )
                .optional()?;
            Ok(entry)
        })
        .await
    }

    async fn find_by_gregorian(&self, date: &str) -> RepositoryResult<Option<CalendarEntry>> {
        let date = date.to_string();
        self.with_connection(move |conn| {
            let entry = conn
                .query_row(
                    "SELECT year, month, day, gregorian \
                     FROM hijri_simple \
                     WHERE gregorian = ?1",
                    params![date],
                    entry_from_row,
                )
                .optional()?;
            Ok(entry)
        })
        .await
    }

    async fn find_month(&self, year: i32, month: u32) -> RepositoryResult<Vec<CalendarEntry>> {
        self.with_connection(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT year, month, day, gregorian \
                 FROM hijri_simple \
                 WHERE year = ?1 AND month = ?2 \
                 ORDER BY day",
            )?;
            let entries = stmt
                .query_map(params![year, month], entry_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
    }

    async fn find_year(&self, year: i32) -> RepositoryResult<Vec<CalendarEntry>> {
        self.with_connection(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT year, month, day, gregorian \
                 FROM hijri_simple \
                 WHERE year = ?1 \
                 ORDER BY month, day",
            )?;
            let entries = stmt
                .query_map(params![year], entry_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
    }
}
