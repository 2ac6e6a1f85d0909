//! Router configuration for the HTTP API.
//!
//! This module sets up all routes under the configured path prefix, plus
//! middleware (CORS, compression, tracing), and creates the axum router
//! ready for serving.

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::config::AppConfig;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState, config: &AppConfig) -> Router {
    // Allow-listed origins with credentials. Methods and headers mirror the
    // request: a wildcard cannot be combined with credentials.
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    let api = Router::new()
        // Public endpoints
        .route("/status", get(handlers::api_status))
        .route("/hijriToGregorian", get(handlers::hijri_to_gregorian))
        .route("/gregorianToHijri", get(handlers::gregorian_to_hijri))
        .route("/month", get(handlers::get_month))
        .route("/year", get(handlers::get_year))
        // Private endpoints (require API key)
        .route("/miqaat", get(handlers::get_miqaat))
        .route("/device-sync", get(handlers::device_sync))
        .route("/firmware-update", get(handlers::firmware_update));

    let app = if config.api_prefix.is_empty() || config.api_prefix == "/" {
        api
    } else {
        Router::new().nest(&config.api_prefix, api)
    };

    app.layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
