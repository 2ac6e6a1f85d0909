//! Bohra Calendar API server binary.
//!
//! This is the main entry point for the calendar REST API server. It loads
//! configuration, opens the calendar repository, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run against the bundled SQLite table (default)
//! API_KEY=secret cargo run --bin bohra-calendar-server
//!
//! # Run with the in-memory repository
//! API_KEY=secret REPOSITORY_TYPE=local cargo run --bin bohra-calendar-server
//! ```
//!
//! # Environment Variables
//!
//! - `API_KEY`: shared secret for the private endpoints (required)
//! - `API_PREFIX`: route prefix (default: /api/v1)
//! - `ALLOWED_ORIGINS`: comma-separated CORS origin allow-list
//! - `REPOSITORY_TYPE`: repository backend, `sqlite` or `local`
//! - `CALENDAR_DB_PATH`: path to the SQLite table (default: data/Bohra_Calendar_5300AH.sqlite)
//! - `CALENDAR_CONFIG`: path to a calendar.toml replacing the variables above
//! - `HOST`: server host (default: 0.0.0.0)
//! - `PORT`: server port (default: 8080)
//! - `RUST_LOG`: log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use bohra_calendar::config::AppConfig;
use bohra_calendar::db::RepositoryFactory;
use bohra_calendar::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Bohra Calendar API server");

    // Resolve configuration once; the API key never changes afterwards
    let config = AppConfig::load().map_err(|e| anyhow::anyhow!(e))?;

    let repository = RepositoryFactory::from_config(&config)?;
    match repository.health_check().await {
        Ok(true) => info!("Calendar repository ready"),
        Ok(false) => warn!("Calendar repository reachable but reported unhealthy"),
        Err(e) => warn!("Calendar repository health check failed: {}", e),
    }

    // Create application state
    let state = AppState::new(repository, config.api_key.clone());

    // Create router with all endpoints
    let app = create_router(state, &config);

    // Determine bind address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("Server listening on http://{}{}", addr, config.api_prefix);
    info!("Status endpoint: http://{}{}/status", addr, config.api_prefix);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
