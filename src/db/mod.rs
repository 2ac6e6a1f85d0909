//! Database module for the calendar lookup table.
//!
//! This module provides abstractions for table lookups via the Repository
//! pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs) - Abstract Interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │   SqliteRepository            │   LocalRepository
//!     │   (read-only file)            │   (in-memory)
//!     └──────────────────────────────┘
//! ```
//!
//! The store is read-only from the service's perspective: the table is
//! populated once by an external data-loading process and never changes
//! while the service runs. No implementation exposes a write path.

// Feature flag priority: sqlite > local
// When multiple features are enabled (e.g., --all-features), sqlite takes precedence.
#[cfg(not(any(feature = "sqlite-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use repositories::SqliteRepository;
pub use repository::{CalendarRepository, RepositoryError, RepositoryResult};
