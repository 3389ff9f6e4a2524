//! HTTP adapters - the REST surface of the dashboard.
//!
//! Feature routers (auth, dashboard, widgets, records) merge into one
//! application router. The session gate wraps all of them, so every
//! route - the fallback included - goes through the redirect decision
//! before any handler runs. Infrastructure layers (request ids,
//! tracing, timeout, CORS, compression) wrap the gate in turn.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod middleware;
pub mod records;
pub mod widgets;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{session_gate, CurrentUser, RequireUser, SESSION_COOKIE};

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::ports::{
    ContributionProvider, IdentityProvider, LogStore, LottoProvider, SettingsStore,
    WeatherProvider,
};

/// Every port the HTTP surface depends on, injected once at startup.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub weather: Arc<dyn WeatherProvider>,
    pub lotto: Arc<dyn LottoProvider>,
    pub github: Arc<dyn ContributionProvider>,
    pub settings: Arc<dyn SettingsStore>,
    pub log: Arc<dyn LogStore>,
}

impl AppState {
    fn auth_state(&self) -> auth::AuthAppState {
        auth::AuthAppState {
            identity: self.identity.clone(),
        }
    }

    fn dashboard_state(&self) -> dashboard::DashboardAppState {
        dashboard::DashboardAppState {
            weather: self.weather.clone(),
        }
    }

    fn widgets_state(&self) -> widgets::WidgetsAppState {
        widgets::WidgetsAppState {
            weather: self.weather.clone(),
            lotto: self.lotto.clone(),
            github: self.github.clone(),
        }
    }

    fn records_state(&self) -> records::RecordsAppState {
        records::RecordsAppState {
            settings: self.settings.clone(),
            log: self.log.clone(),
        }
    }
}

/// Router-level knobs, resolved from configuration at startup.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub request_timeout: Duration,
    /// Exact origins allowed to make credentialed cross-origin calls.
    /// An empty list leaves CORS headers off entirely (same-origin deployment).
    pub cors_origins: Vec<HeaderValue>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Assembles the full application router.
pub fn app_router(state: AppState, options: HttpOptions) -> Router {
    let gated = Router::new()
        .merge(auth::auth_routes(state.auth_state()))
        .merge(dashboard::dashboard_routes(state.dashboard_state()))
        .merge(widgets::widget_routes(state.widgets_state()))
        .merge(records::record_routes(state.records_state()))
        .fallback(not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.identity.clone(),
            middleware::session_gate,
        ));

    gated.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(options.request_timeout))
            .layer(cors_layer(options.cors_origins))
            .layer(CompressionLayer::new())
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}

/// 404 for routes nothing matched. Anonymous traffic never sees this;
/// the gate has already redirected it to the login page.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "Not found".to_string(),
        }),
    )
}

fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
