//! Repository implementations module.
//!
//! This module contains different implementations of the `CalendarRepository` trait:
//! - `sqlite`: read-only rusqlite implementation over the precomputed table
//! - `local`: in-memory implementation for unit testing and local development
pub mod local;
#[cfg(feature = "sqlite-repo")]
pub mod sqlite;

pub use local::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use sqlite::SqliteRepository;
