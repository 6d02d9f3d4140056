//! Web server bootstrap: CORS, API routes and static front-end

use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use crate::api::{self, AppState};
use crate::config::AppConfig;
use crate::weather::WeatherClient;

/// Build the full application router for the given configuration.
pub fn app(config: &AppConfig) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::new(WeatherClient::new(config)?);

    // Budget for the whole request: geocode plus the slower of the two
    // follow-up calls, each bounded by the client timeout.
    let request_budget = Duration::from_secs(config.request_timeout_secs * 2 + 5);

    Ok(Router::new()
        .nest("/api", api::router(state))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TimeoutLayer::new(request_budget))
        .layer(cors))
}

/// Bind and serve until the process is stopped.
pub async fn run(config: AppConfig) -> Result<()> {
    let router = app(&config)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Web server running at http://localhost:{}", config.port);
    axum::serve(listener, router)
        .await
        .context("Server terminated unexpectedly")
}
