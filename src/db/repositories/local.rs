//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository trait
//! suitable for unit testing and local development. All data is stored in a
//! `BTreeMap`, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::db::repository::{CalendarRepository, RepositoryResult};
use crate::models::CalendarEntry;

/// In-memory local repository.
///
/// Entries are keyed `(year, month, day)` so range scans come back in the
/// same (month, day) order the SQLite backend produces.
///
/// # Example
/// ```
/// use bohra_calendar::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// repo.insert_entry(1446, 1, 1, "2024-07-07");
/// assert_eq!(repo.entry_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    entries: BTreeMap<(i32, u32, u32), String>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the repository.
    ///
    /// This is a helper method for seeding data. Inserting the same
    /// `(year, month, day)` key twice replaces the previous row, preserving
    /// the at-most-one-entry-per-key invariant of the table.
    pub fn insert_entry(&self, year: i32, month: u32, day: u32, gregorian: impl Into<String>) {
        let mut data = self.data.write().unwrap();
        data.entries.insert((year, month, day), gregorian.into());
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        data.entries.clear();
    }

    /// Get the number of entries stored.
    pub fn entry_count(&self) -> usize {
        self.data.read().unwrap().entries.len()
    }
}

fn entry_for(key: &(i32, u32, u32), gregorian: &str) -> CalendarEntry {
    CalendarEntry {
        year: key.0,
        month: key.1,
        day: key.2,
        gregorian: gregorian.to_string(),
    }
}

#[async_trait]
impl CalendarRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }

    async fn find_by_hijri(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> RepositoryResult<Option<CalendarEntry>> {
        let data = self.data.read().unwrap();
        let key = (year, month, day);
        Ok(data
            .entries
            .get(&key)
            .map(|gregorian| entry_for(&key, gregorian)))
    }

    async fn find_by_gregorian(&self, date: &str) -> RepositoryResult<Option<CalendarEntry>> {
        let data = self.data.read().unwrap();
        Ok(data
            .entries
            .iter()
            .find(|(_, gregorian)| gregorian.as_str() == date)
            .map(|(key, gregorian)| entry_for(key, gregorian)))
    }

    async fn find_month(&self, year: i32, month: u32) -> RepositoryResult<Vec<CalendarEntry>> {
        let data = self.data.read().unwrap();
        Ok(data
            .entries
            .range((year, month, u32::MIN)..=(year, month, u32::MAX))
            .map(|(key, gregorian)| entry_for(key, gregorian))
            .collect())
    }

    async fn find_year(&self, year: i32) -> RepositoryResult<Vec<CalendarEntry>> {
        let data = self.data.read().unwrap();
        Ok(data
            .entries
            .range((year, u32::MIN, u32::MIN)..=(year, u32::MAX, u32::MAX))
            .map(|(key, gregorian)| entry_for(key, gregorian))
            .collect())
    }
}
