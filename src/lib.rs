//! # Bohra Calendar API
//!
//! Dawoodi Bohra fixed-tabular Hijri calendar service with public and
//! private endpoints.
//!
//! A precomputed SQLite table maps Hijri (year, month, day) triples
//! bijectively to Gregorian date strings; this crate exposes that table as
//! a small REST API. There is no algorithmic calendar conversion: every
//! operation is a single indexed lookup followed by a response reshape.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: calendar row and Hijri label types
//! - [`db`]: repository trait, SQLite and in-memory backends
//! - [`auth`]: shared-secret access gate for the private endpoints
//! - [`config`]: startup configuration from environment or TOML file
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! The lookup table is read-only: entries are populated once by an external
//! loading process and never change while the service runs, so every
//! request can be served fully in parallel with no cross-request
//! coordination.

pub mod auth;
pub mod config;
pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
