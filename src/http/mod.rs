//! HTTP server module for the Bohra Calendar API.
//!
//! This module provides an axum-based HTTP server exposing the calendar
//! table as a REST API: public lookup endpoints, a status check, and three
//! private endpoints gated by a shared-secret header.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parameter parsing                                │
//! │  - JSON serialization, response shaping                   │
//! │  - CORS, compression, tracing, error handling             │
//! │  - Shared-secret gate on private endpoints                │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - Read-only calendar table lookups                       │
//! │  - SqliteRepository / LocalRepository                     │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
