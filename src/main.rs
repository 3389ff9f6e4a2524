//! Dashboard backend entrypoint.
//!
//! Loads configuration, connects the database pool, wires every adapter
//! into the HTTP router, and serves until interrupted.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use homeboard::adapters::auth::{GoTrueConfig, GoTrueIdentity};
use homeboard::adapters::github::{GithubConfig, GithubContributionClient};
use homeboard::adapters::http::{app_router, AppState, HttpOptions};
use homeboard::adapters::lotto::{MegaMillionsClient, MegaMillionsConfig};
use homeboard::adapters::postgres::{PostgresLogStore, PostgresSettingsStore};
use homeboard::adapters::weather::{OpenWeatherClient, OpenWeatherConfig};
use homeboard::config::AppConfig;
use homeboard::domain::Coordinates;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");

    init_tracing(&config);

    config.validate().expect("Invalid configuration");

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    if config.database.run_migrations {
        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("Failed to run database migrations");
        info!("Database migrations applied");
    }

    let identity = GoTrueIdentity::new(
        GoTrueConfig::new(config.identity.base_url.clone(), config.identity.api_key.clone())
            .with_timeout(config.identity.timeout()),
    );

    let weather = OpenWeatherClient::new(
        OpenWeatherConfig::new(config.weather.api_key.clone())
            .with_base_url(config.weather.base_url.clone())
            .with_default_coordinates(Coordinates::new(
                config.weather.default_lat,
                config.weather.default_lon,
            ))
            .with_timeout(config.weather.timeout()),
    );

    let lotto = MegaMillionsClient::new(
        MegaMillionsConfig::new()
            .with_feed_url(config.lotto.feed_url.clone())
            .with_timeout(config.lotto.timeout()),
    );

    let mut github_config = GithubConfig::new()
        .with_endpoint(config.github.endpoint.clone())
        .with_timeout(config.github.timeout());
    if let Some(token) = config.github.token.clone() {
        github_config = github_config.with_token(token);
    }
    let github = GithubContributionClient::new(github_config);

    let state = AppState {
        identity: Arc::new(identity),
        weather: Arc::new(weather),
        lotto: Arc::new(lotto),
        github: Arc::new(github),
        settings: Arc::new(PostgresSettingsStore::new(pool.clone())),
        log: Arc::new(PostgresLogStore::new(pool)),
    };

    let options = HttpOptions {
        request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        cors_origins: parse_cors_origins(&config),
    };

    let app = app_router(state, options);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    info!(%addr, environment = ?config.server.environment, "Dashboard backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Server shut down");
}

/// Honors `RUST_LOG` when set, otherwise the configured filter.
/// Production gets JSON lines for log shipping.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn parse_cors_origins(config: &AppConfig) -> Vec<HeaderValue> {
    config
        .server
        .cors_origins_list()
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .expect("Invalid CORS origin in configuration")
        })
        .collect()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
