//! Integration tests for the widget and record endpoints.
//!
//! These tests drive the assembled router with counting port mocks:
//! 1. Input validation rejects before the port is ever invoked
//! 2. Port failures surface with their own status and message
//! 3. Settings and daily-log flows persist through their stores

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use chrono::Utc;
use serde_json::json;
use tower::ServiceExt;

use homeboard::adapters::auth::MockIdentityProvider;
use homeboard::adapters::http::{app_router, AppState, HttpOptions};
use homeboard::domain::{
    AdapterError, ContributionCalendar, ContributionDay, ContributionWeek, Coordinates,
    DashboardSettings, LogEntry, LogEntryId, LottoDraw, NewLogEntry, StoreError, UserId,
    WeatherReport,
};
use homeboard::ports::{
    ContributionProvider, LogStore, LottoProvider, SettingsStore, WeatherProvider,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Weather mock that counts invocations and records the coordinates.
struct CountingWeather {
    calls: AtomicUsize,
    last_coordinates: Mutex<Option<Coordinates>>,
}

impl CountingWeather {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_coordinates: Mutex::new(None),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for CountingWeather {
    async fn fetch_current(
        &self,
        coordinates: Option<Coordinates>,
    ) -> Result<WeatherReport, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_coordinates.lock().unwrap() = coordinates;

        Ok(WeatherReport {
            temperature: Some(72.5),
            description: Some("clear sky".to_string()),
            icon_code: Some("01d".to_string()),
            location_name: Some("Tulsa".to_string()),
        })
    }
}

/// Lotto mock that replays a scripted outcome.
struct ScriptedLotto {
    result: Result<LottoDraw, AdapterError>,
}

#[async_trait]
impl LottoProvider for ScriptedLotto {
    async fn next_draw(&self) -> Result<LottoDraw, AdapterError> {
        self.result.clone()
    }
}

/// Contribution mock that counts invocations and replays a scripted outcome.
struct CountingContributions {
    calls: AtomicUsize,
    result: Result<ContributionCalendar, AdapterError>,
}

impl CountingContributions {
    fn new(result: Result<ContributionCalendar, AdapterError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContributionProvider for CountingContributions {
    async fn fetch_calendar(&self, _username: &str) -> Result<ContributionCalendar, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// In-memory settings store.
struct MemorySettings {
    rows: Mutex<HashMap<UserId, DashboardSettings>>,
}

impl MemorySettings {
    fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SettingsStore for MemorySettings {
    async fn select_one(&self, user_id: UserId) -> Result<DashboardSettings, StoreError> {
        self.rows
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn upsert(&self, settings: &DashboardSettings) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .insert(settings.user_id, settings.clone());
        Ok(())
    }
}

/// In-memory log store enforcing the one-entry-per-day constraint.
struct MemoryLog {
    rows: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LogStore for MemoryLog {
    async fn insert(&self, entry: &NewLogEntry) -> Result<LogEntry, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let duplicate = rows
            .iter()
            .any(|row| row.user_id == entry.user_id && row.entry_date == entry.entry_date);
        if duplicate {
            return Err(StoreError::AlreadyExists);
        }

        let stored = LogEntry {
            id: LogEntryId::new(),
            user_id: entry.user_id,
            entry_date: entry.entry_date,
            note: entry.note.clone(),
            created_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }
}

/// The assembled router plus handles on the counting mocks.
struct WidgetTestApp {
    app: axum::Router,
    weather: Arc<CountingWeather>,
    github: Arc<CountingContributions>,
}

fn sample_calendar() -> ContributionCalendar {
    ContributionCalendar {
        total_contributions: 3,
        weeks: vec![ContributionWeek {
            days: vec![ContributionDay {
                count: 3,
                date: "2025-06-02".to_string(),
                color_token: "#40c463".to_string(),
            }],
        }],
    }
}

fn sample_draw() -> LottoDraw {
    LottoDraw {
        next_jackpot_annuity: 226_000_000.0,
        next_jackpot_cash: 113_100_000.0,
        next_drawing_date: "2025-06-17T23:00:00".to_string(),
    }
}

/// Builds the router with a signed-in session behind `valid-token`.
fn widget_app(
    lotto: Result<LottoDraw, AdapterError>,
    github: Result<ContributionCalendar, AdapterError>,
) -> WidgetTestApp {
    let weather = Arc::new(CountingWeather::new());
    let github = Arc::new(CountingContributions::new(github));

    let state = AppState {
        identity: Arc::new(MockIdentityProvider::new().with_test_user("valid-token")),
        weather: weather.clone(),
        lotto: Arc::new(ScriptedLotto { result: lotto }),
        github: github.clone(),
        settings: Arc::new(MemorySettings::new()),
        log: Arc::new(MemoryLog::new()),
    };

    WidgetTestApp {
        app: app_router(state, HttpOptions::default()),
        weather,
        github,
    }
}

fn default_app() -> WidgetTestApp {
    widget_app(Ok(sample_draw()), Ok(sample_calendar()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, "hb_session=valid-token")
        .body(Body::empty())
        .unwrap()
}

fn send_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, "hb_session=valid-token")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Weather Widget Tests
// =============================================================================

#[tokio::test]
async fn test_weather_returns_normalized_report() {
    let fixture = default_app();

    let response = fixture
        .app
        .oneshot(get("/api/weather?lat=36.27&lon=-95.85"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["temperature"], 72.5);
    assert_eq!(body["locationName"], "Tulsa");

    assert_eq!(fixture.weather.call_count(), 1);
    assert_eq!(
        *fixture.weather.last_coordinates.lock().unwrap(),
        Some(Coordinates::new(36.27, -95.85))
    );
}

#[tokio::test]
async fn test_weather_missing_coordinate_is_rejected_before_any_call() {
    let fixture = default_app();

    for uri in [
        "/api/weather",
        "/api/weather?lat=36.27",
        "/api/weather?lon=-95.85",
    ] {
        let response = fixture.app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri {uri}");
        let body = body_json(response).await;
        assert_eq!(
            body["message"],
            "Latitude and longitude are required query parameters."
        );
    }

    assert_eq!(fixture.weather.call_count(), 0);
}

#[tokio::test]
async fn test_weather_numeric_garbage_is_rejected_before_any_call() {
    let fixture = default_app();

    let response = fixture
        .app
        .oneshot(get("/api/weather?lat=north&lon=-95.85"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fixture.weather.call_count(), 0);
}

// =============================================================================
// Lotto Widget Tests
// =============================================================================

#[tokio::test]
async fn test_lotto_serves_the_next_draw() {
    let fixture = default_app();

    let response = fixture.app.oneshot(get("/api/lotto-info")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["nextJackpotAnnuity"], 226_000_000.0);
    assert_eq!(body["nextJackpotCash"], 113_100_000.0);
    assert_eq!(body["nextDrawingDate"], "2025-06-17T23:00:00");
}

#[tokio::test]
async fn test_lotto_extraction_failure_surfaces_as_500() {
    let fixture = widget_app(
        Err(AdapterError::extraction(
            "Failed to process lotto data response.",
        )),
        Ok(sample_calendar()),
    );

    let response = fixture.app.oneshot(get("/api/lotto-info")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Failed to process lotto data response.");
}

#[tokio::test]
async fn test_lotto_missing_field_failure_surfaces_as_500() {
    let fixture = widget_app(
        Err(AdapterError::missing_field(
            "Lotto data is in an unexpected format: missing Jackpot.NextCashValue",
        )),
        Ok(sample_calendar()),
    );

    let response = fixture.app.oneshot(get("/api/lotto-info")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "Lotto data is in an unexpected format: missing Jackpot.NextCashValue"
    );
}

#[tokio::test]
async fn test_lotto_upstream_status_passes_through() {
    let fixture = widget_app(
        Err(AdapterError::transport(503, "Failed to fetch lotto data: 503")),
        Ok(sample_calendar()),
    );

    let response = fixture.app.oneshot(get("/api/lotto-info")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Failed to fetch lotto data: 503");
}

// =============================================================================
// Contribution Widget Tests
// =============================================================================

#[tokio::test]
async fn test_github_requires_username_before_any_call() {
    let fixture = default_app();

    for uri in [
        "/api/github-contributions",
        "/api/github-contributions?username=",
        "/api/github-contributions?username=%20%20",
    ] {
        let response = fixture.app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri {uri}");
        let body = body_json(response).await;
        assert_eq!(
            body["message"],
            "GitHub username is required as a query parameter."
        );
    }

    assert_eq!(fixture.github.call_count(), 0);
}

#[tokio::test]
async fn test_github_returns_calendar() {
    let fixture = default_app();

    let response = fixture
        .app
        .oneshot(get("/api/github-contributions?username=octocat"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["totalContributions"], 3);
    assert_eq!(body["weeks"][0]["days"][0]["colorToken"], "#40c463");

    assert_eq!(fixture.github.call_count(), 1);
}

#[tokio::test]
async fn test_github_graphql_error_answers_502() {
    let fixture = widget_app(
        Ok(sample_draw()),
        Err(AdapterError::graphql(
            "Error in GitHub GraphQL response for octocat: Unknown GraphQL error",
        )),
    );

    let response = fixture
        .app
        .oneshot(get("/api/github-contributions?username=octocat"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "Error in GitHub GraphQL response for octocat: Unknown GraphQL error"
    );
}

#[tokio::test]
async fn test_github_unknown_user_answers_404() {
    let fixture = widget_app(
        Ok(sample_draw()),
        Err(AdapterError::not_found(
            "No contribution data found for GitHub user: ghost. Ensure the username is correct and has activity.",
        )),
    );

    let response = fixture
        .app
        .oneshot(get("/api/github-contributions?username=ghost"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Settings Tests
// =============================================================================

#[tokio::test]
async fn test_settings_round_trip_normalizes_username() {
    let fixture = default_app();

    let response = fixture
        .app
        .clone()
        .oneshot(get("/api/settings"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "No settings saved for this user.");

    let update = json!({
        "defaultLat": 36.27,
        "defaultLon": -95.85,
        "githubUsername": "  octocat  "
    });
    let response = fixture
        .app
        .clone()
        .oneshot(send_json("PUT", "/api/settings", update.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = fixture
        .app
        .clone()
        .oneshot(get("/api/settings"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["defaultLat"], 36.27);
    assert_eq!(body["defaultLon"], -95.85);
    assert_eq!(body["githubUsername"], "octocat");

    // Saving the same payload again replaces the row without error.
    let response = fixture
        .app
        .oneshot(send_json("PUT", "/api/settings", update))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_settings_blank_username_stores_null() {
    let fixture = default_app();

    let response = fixture
        .app
        .clone()
        .oneshot(send_json(
            "PUT",
            "/api/settings",
            json!({ "defaultLat": 36.27, "defaultLon": -95.85, "githubUsername": "   " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = fixture.app.oneshot(get("/api/settings")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["githubUsername"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_settings_rejects_out_of_range_coordinates() {
    let fixture = default_app();

    let response = fixture
        .app
        .oneshot(send_json(
            "PUT",
            "/api/settings",
            json!({ "defaultLat": 95.0, "defaultLon": 0.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "defaultLat must be within [-90, 90] and defaultLon within [-180, 180]."
    );
}

#[tokio::test]
async fn test_settings_requires_a_body() {
    let fixture = default_app();

    let request = Request::builder()
        .method("PUT")
        .uri("/api/settings")
        .header(header::COOKIE, "hb_session=valid-token")
        .body(Body::empty())
        .unwrap();

    let response = fixture.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "A settings body with defaultLat and defaultLon is required."
    );
}

// =============================================================================
// Daily Log Tests
// =============================================================================

#[tokio::test]
async fn test_log_append_then_duplicate_conflicts() {
    let fixture = default_app();

    let entry = json!({ "entryDate": "2025-06-17", "note": "  shipped the widget  " });
    let response = fixture
        .app
        .clone()
        .oneshot(send_json("POST", "/api/log", entry.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["entryDate"], "2025-06-17");
    assert_eq!(body["note"], "shipped the widget");

    let response = fixture
        .app
        .clone()
        .oneshot(send_json("POST", "/api/log", entry))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["message"], "already recorded");

    // A different day is a fresh entry.
    let response = fixture
        .app
        .oneshot(send_json(
            "POST",
            "/api/log",
            json!({ "entryDate": "2025-06-18", "note": "rested" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_log_rejects_bad_date() {
    let fixture = default_app();

    let response = fixture
        .app
        .oneshot(send_json(
            "POST",
            "/api/log",
            json!({ "entryDate": "06/17/2025", "note": "wrong format" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "entryDate must be a date in YYYY-MM-DD format.");
}

#[tokio::test]
async fn test_log_requires_a_note() {
    let fixture = default_app();

    let response = fixture
        .app
        .oneshot(send_json(
            "POST",
            "/api/log",
            json!({ "entryDate": "2025-06-17", "note": "   " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "A note is required.");
}
