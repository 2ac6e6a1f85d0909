#![cfg(feature = "http-server")]

//! End-to-end tests for the HTTP API.
//!
//! These tests drive the full router (routing, extractors, handlers, and
//! error mapping) against a seeded in-memory repository.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bohra_calendar::config::AppConfig;
use bohra_calendar::db::repositories::LocalRepository;
use bohra_calendar::db::repository::CalendarRepository;
use bohra_calendar::http::{create_router, AppState};

const TEST_API_KEY: &str = "test-secret-key";

const ROWS: &[(i32, u32, u32, &str)] = &[
    (1446, 1, 1, "2024-07-07"),
    (1446, 1, 2, "2024-07-08"),
    (1446, 1, 3, "2024-07-09"),
    (1446, 2, 1, "2024-08-05"),
    (1446, 2, 2, "2024-08-06"),
    (1446, 10, 1, "2025-04-01"),
];

fn test_config() -> AppConfig {
    AppConfig {
        api_key: TEST_API_KEY.to_string(),
        api_prefix: "/api/v1".to_string(),
        allowed_origins: vec!["http://localhost:3000".to_string()],
        repository_type: "local".to_string(),
        database_path: PathBuf::from("unused.sqlite"),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

fn test_app() -> Router {
    let repo = LocalRepository::new();
    for (year, month, day, gregorian) in ROWS {
        repo.insert_entry(*year, *month, *day, *gregorian);
    }
    let state = AppState::new(Arc::new(repo) as Arc<dyn CalendarRepository>, TEST_API_KEY);
    create_router(state, &test_config())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap()
    };
    (status, value)
}

async fn get_with_key(app: Router, uri: &str, key: &str) -> (StatusCode, Value) {
    let (status, body) = send(
        app,
        Request::builder()
            .uri(uri)
            .header("x-api-key", key)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap()
    };
    (status, value)
}

// =========================================================
// Status
// =========================================================

#[tokio::test]
async fn test_status_returns_ok() {
    let (status, body) = get(test_app(), "/api/v1/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "ok", "message": "Bohra Calendar API is running"})
    );
}

#[tokio::test]
async fn test_status_ignores_credentials() {
    // The status endpoint is public; a bogus key changes nothing
    let (status, _) = get_with_key(test_app(), "/api/v1/status", "wrong").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_status_with_empty_store() {
    let state = AppState::new(
        Arc::new(LocalRepository::new()) as Arc<dyn CalendarRepository>,
        TEST_API_KEY,
    );
    let app = create_router(state, &test_config());
    let (status, _) = get(app, "/api/v1/status").await;
    assert_eq!(status, StatusCode::OK);
}

// =========================================================
// Point conversions
// =========================================================

#[tokio::test]
async fn test_hijri_to_gregorian_known_date() {
    let (status, body) = get(
        test_app(),
        "/api/v1/hijriToGregorian?year=1446&month=1&day=1",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"hijri": "1-1-1446 AH", "gregorian": "2024-07-07"})
    );
}

#[tokio::test]
async fn test_hijri_to_gregorian_unknown_date() {
    let (status, body) = get(
        test_app(),
        "/api/v1/hijriToGregorian?year=1446&month=1&day=30",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Hijri date not found");
}

#[tokio::test]
async fn test_hijri_to_gregorian_malformed_params() {
    let (status, _) = send(
        test_app(),
        Request::builder()
            .uri("/api/v1/hijriToGregorian?year=abc&month=1&day=1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_gregorian_to_hijri_known_date() {
    let (status, body) = get(test_app(), "/api/v1/gregorianToHijri?date=2024-07-07").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"gregorian": "2024-07-07", "hijri": "1-1-1446 AH"})
    );
}

#[tokio::test]
async fn test_gregorian_to_hijri_unknown_date() {
    let (status, body) = get(test_app(), "/api/v1/gregorianToHijri?date=1999-01-01").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Gregorian date not found");
}

#[tokio::test]
async fn test_point_conversion_round_trip() {
    for (year, month, day, gregorian) in ROWS {
        let uri = format!(
            "/api/v1/hijriToGregorian?year={}&month={}&day={}",
            year, month, day
        );
        let (status, body) = get(test_app(), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["gregorian"], *gregorian);

        let uri = format!("/api/v1/gregorianToHijri?date={}", gregorian);
        let (status, body) = get(test_app(), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hijri"], format!("{}-{}-{} AH", day, month, year));
    }
}

// =========================================================
// Month listing
// =========================================================

#[tokio::test]
async fn test_month_listing_in_day_order() {
    let (status, body) = get(test_app(), "/api/v1/month?year=1446&month=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 1446);
    assert_eq!(body["month"], 1);

    let days: Vec<u64> = body["days"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["day"].as_u64().unwrap())
        .collect();
    assert_eq!(days, vec![1, 2, 3]);
    assert_eq!(body["days"][0]["gregorian"], "2024-07-07");
}

#[tokio::test]
async fn test_month_listing_unknown_month() {
    let (status, body) = get(test_app(), "/api/v1/month?year=1446&month=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Month not found");
}

#[tokio::test]
async fn test_month_listing_out_of_range_month_same_signal() {
    // Out-of-range month and absent month are indistinguishable
    let (status, body) = get(test_app(), "/api/v1/month?year=1446&month=13").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Month not found");
}

// =========================================================
// Year listing
// =========================================================

#[tokio::test]
async fn test_year_listing_groups_by_month() {
    let (status, body) = get(test_app(), "/api/v1/year?year=1446").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 1446);

    let months = body["months"].as_object().unwrap();
    assert_eq!(months.len(), 3);

    let month_1: Vec<u64> = months["1"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["day"].as_u64().unwrap())
        .collect();
    assert_eq!(month_1, vec![1, 2, 3]);

    let month_2: Vec<u64> = months["2"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["day"].as_u64().unwrap())
        .collect();
    assert_eq!(month_2, vec![1, 2]);

    assert_eq!(months["10"][0]["gregorian"], "2025-04-01");
}

#[tokio::test]
async fn test_year_listing_union_matches_flat_rows() {
    let (_, body) = get(test_app(), "/api/v1/year?year=1446").await;

    let mut flat: Vec<(u64, String)> = Vec::new();
    for (month, days) in body["months"].as_object().unwrap() {
        for day in days.as_array().unwrap() {
            flat.push((
                month.parse::<u64>().unwrap() * 100 + day["day"].as_u64().unwrap(),
                day["gregorian"].as_str().unwrap().to_string(),
            ));
        }
    }
    flat.sort();

    let mut expected: Vec<(u64, String)> = ROWS
        .iter()
        .filter(|(year, _, _, _)| *year == 1446)
        .map(|(_, month, day, gregorian)| {
            (u64::from(month * 100 + day), gregorian.to_string())
        })
        .collect();
    expected.sort();

    assert_eq!(flat, expected);
}

#[tokio::test]
async fn test_year_listing_emits_months_in_ascending_order() {
    // Wire order matters: check the raw body, since a parsed JSON map
    // re-orders keys lexicographically ("10" < "2").
    let (status, body) = send(
        test_app(),
        Request::builder()
            .uri("/api/v1/year?year=1446")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let pos_1 = body.find("\"1\":[").unwrap();
    let pos_2 = body.find("\"2\":[").unwrap();
    let pos_10 = body.find("\"10\":[").unwrap();
    assert!(pos_1 < pos_2);
    assert!(pos_2 < pos_10);
}

#[tokio::test]
async fn test_year_listing_unknown_year() {
    let (status, body) = get(test_app(), "/api/v1/year?year=1500").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Year not found");
}

// =========================================================
// Private endpoints
// =========================================================

#[tokio::test]
async fn test_miqaat_with_valid_key() {
    let (status, body) = get_with_key(test_app(), "/api/v1/miqaat", TEST_API_KEY).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"miqaat": "Miqaat data will be added soon (private endpoint)."})
    );
}

#[tokio::test]
async fn test_miqaat_without_key() {
    let (status, body) = get(test_app(), "/api/v1/miqaat").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Invalid or missing API Key");
}

#[tokio::test]
async fn test_miqaat_with_wrong_key() {
    let (status, _) = get_with_key(test_app(), "/api/v1/miqaat", "wrong-key").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_is_case_sensitive_on_value() {
    let (status, _) = get_with_key(test_app(), "/api/v1/miqaat", "Test-Secret-Key").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_header_name_is_case_insensitive() {
    // HTTP header names are case-insensitive; only the value is exact
    let (status, body) = send(
        test_app(),
        Request::builder()
            .uri("/api/v1/device-sync")
            .header("X-API-KEY", TEST_API_KEY)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"message": "Device sync OK"})
    );
}

#[tokio::test]
async fn test_gate_rejects_empty_value() {
    let (status, _) = get_with_key(test_app(), "/api/v1/firmware-update", "").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_firmware_update_with_valid_key() {
    let (status, body) = get_with_key(test_app(), "/api/v1/firmware-update", TEST_API_KEY).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"update": false}));
}

// =========================================================
// Prefix handling
// =========================================================

#[tokio::test]
async fn test_routes_live_under_the_configured_prefix() {
    let (status, _) = get(test_app(), "/status").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_prefix_serves_at_root() {
    let repo = LocalRepository::new();
    let state = AppState::new(Arc::new(repo) as Arc<dyn CalendarRepository>, TEST_API_KEY);
    let mut config = test_config();
    config.api_prefix = String::new();
    let app = create_router(state, &config);

    let (status, body) = get(app, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
