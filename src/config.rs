//! Application configuration.
//!
//! Configuration is loaded from environment variables, with an optional
//! `calendar.toml` file for deployments that prefer file-based settings.
//! The API key is resolved once here and injected into the handlers' shared
//! state at startup; nothing mutates it afterwards.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the precomputed calendar table.
pub const DEFAULT_DB_PATH: &str = "data/Bohra_Calendar_5300AH.sqlite";

/// Default path prefix for all API routes.
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

fn default_prefix() -> String {
    DEFAULT_API_PREFIX.to_string()
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_repository_type() -> String {
    "sqlite".to_string()
}

/// Application configuration resolved at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shared secret required by the private endpoints
    pub api_key: String,
    /// Path prefix for all routes
    #[serde(default = "default_prefix")]
    pub api_prefix: String,
    /// Origins allowed by the CORS policy
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Repository backend to use ("sqlite" or "local")
    #[serde(default = "default_repository_type")]
    pub repository_type: String,
    /// Location of the calendar SQLite file
    #[serde(default = "default_db_path")]
    pub database_path: PathBuf,
    /// Server bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `API_KEY` (required): shared secret for the private endpoints
    /// - `API_PREFIX` (optional, default: `/api/v1`): route prefix
    /// - `ALLOWED_ORIGINS` (optional): comma-separated CORS origin allow-list
    /// - `REPOSITORY_TYPE` (optional, default: `sqlite`): `sqlite` | `local`
    /// - `CALENDAR_DB_PATH` (optional, default: `data/Bohra_Calendar_5300AH.sqlite`)
    /// - `HOST` (optional, default: `0.0.0.0`): server bind host
    /// - `PORT` (optional, default: `8080`): server bind port
    ///
    /// # Errors
    /// Returns an error if required variables are not set.
    pub fn from_env() -> Result<Self, String> {
        let api_key =
            env::var("API_KEY").map_err(|_| "API_KEY environment variable not set".to_string())?;
        let api_prefix = env::var("API_PREFIX").unwrap_or_else(|_| default_prefix());
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let repository_type =
            env::var("REPOSITORY_TYPE").unwrap_or_else(|_| default_repository_type());
        let database_path = env::var("CALENDAR_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_db_path());
        let host = env::var("HOST").unwrap_or_else(|_| default_host());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_port);

        Ok(Self {
            api_key,
            api_prefix,
            allowed_origins,
            repository_type,
            database_path,
            host,
            port,
        })
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Resolve configuration for the current process.
    ///
    /// Sources, in order:
    /// 1. The file named by `CALENDAR_CONFIG`, if set
    /// 2. A `calendar.toml` in a standard location
    /// 3. Environment variables
    pub fn load() -> Result<Self, String> {
        if let Ok(path) = env::var("CALENDAR_CONFIG") {
            return Self::from_file(path);
        }

        for candidate in ["calendar.toml", "config/calendar.toml"] {
            if Path::new(candidate).exists() {
                return Self::from_file(candidate);
            }
        }

        Self::from_env()
    }
}
