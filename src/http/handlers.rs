//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint: a status check, four public
//! lookups against the calendar table, and three key-gated private
//! endpoints.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};

use super::dto::{
    DeviceSyncResponse, FirmwareUpdateResponse, GregorianQuery, GregorianToHijriResponse,
    HijriQuery, HijriToGregorianResponse, MiqaatResponse, MonthGroups, MonthQuery, MonthResponse,
    StatusResponse, YearQuery, YearResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::auth;
use crate::models::HijriDate;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Public Endpoints
// =============================================================================

/// GET /status
///
/// API status check. Never touches the store and never fails.
pub async fn api_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: "Bohra Calendar API is running".to_string(),
    })
}

/// GET /hijriToGregorian?year=&month=&day=
///
/// Convert Hijri (AH) → Gregorian.
pub async fn hijri_to_gregorian(
    State(state): State<AppState>,
    Query(query): Query<HijriQuery>,
) -> HandlerResult<HijriToGregorianResponse> {
    let entry = state
        .repository
        .find_by_hijri(query.year, query.month, query.day)
        .await?
        .ok_or_else(|| AppError::NotFound("Hijri date not found".to_string()))?;

    Ok(Json(HijriToGregorianResponse {
        hijri: HijriDate::new(query.year, query.month, query.day).to_string(),
        gregorian: entry.gregorian,
    }))
}

/// GET /gregorianToHijri?date=
///
/// Convert Gregorian → Hijri (AH). The date string is matched verbatim
/// against stored values.
pub async fn gregorian_to_hijri(
    State(state): State<AppState>,
    Query(query): Query<GregorianQuery>,
) -> HandlerResult<GregorianToHijriResponse> {
    let entry = state
        .repository
        .find_by_gregorian(&query.date)
        .await?
        .ok_or_else(|| AppError::NotFound("Gregorian date not found".to_string()))?;

    Ok(Json(GregorianToHijriResponse {
        gregorian: query.date,
        hijri: entry.hijri().to_string(),
    }))
}

/// GET /month?year=&month=
///
/// Return the full month calendar for a Hijri year/month. An out-of-range
/// month and a month with no data produce the same not-found signal.
pub async fn get_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> HandlerResult<MonthResponse> {
    let entries = state.repository.find_month(query.year, query.month).await?;

    if entries.is_empty() {
        return Err(AppError::NotFound("Month not found".to_string()));
    }

    Ok(Json(MonthResponse {
        year: query.year,
        month: query.month,
        days: entries.into_iter().map(Into::into).collect(),
    }))
}

/// GET /year?year=
///
/// Return the full year calendar, grouped by month.
pub async fn get_year(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> HandlerResult<YearResponse> {
    let entries = state.repository.find_year(query.year).await?;

    if entries.is_empty() {
        return Err(AppError::NotFound("Year not found".to_string()));
    }

    Ok(Json(YearResponse {
        year: query.year,
        months: MonthGroups::from_sorted_entries(entries),
    }))
}

// =============================================================================
// Private Endpoints (require API key)
// =============================================================================

/// Validate the API key header for private endpoints.
fn require_api_key(headers: &HeaderMap, state: &AppState) -> Result<(), AppError> {
    let provided = headers
        .get(auth::API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if !auth::validate_api_key(provided, &state.api_key) {
        return Err(AppError::Unauthorized(
            "Invalid or missing API Key".to_string(),
        ));
    }

    Ok(())
}

/// GET /miqaat
pub async fn get_miqaat(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> HandlerResult<MiqaatResponse> {
    require_api_key(&headers, &state)?;

    Ok(Json(MiqaatResponse {
        miqaat: "Miqaat data will be added soon (private endpoint).".to_string(),
    }))
}

/// GET /device-sync
pub async fn device_sync(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> HandlerResult<DeviceSyncResponse> {
    require_api_key(&headers, &state)?;

    Ok(Json(DeviceSyncResponse {
        message: "Device sync OK".to_string(),
    }))
}

/// GET /firmware-update
pub async fn firmware_update(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> HandlerResult<FirmwareUpdateResponse> {
    require_api_key(&headers, &state)?;

    Ok(Json(FirmwareUpdateResponse { update: false }))
}
