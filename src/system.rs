//! Welcome and health endpoints.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use time::OffsetDateTime;

use crate::{app::not_found, state::AppState};

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub uptime_seconds: u64,
}

/// `GET /`, mounted at the root.
pub fn welcome_routes() -> Router<AppState> {
    Router::new().route("/", get(welcome).fallback(not_found))
}

/// `GET /health`, mounted under `/api`.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health).fallback(not_found))
}

pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Users API".into(),
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: OffsetDateTime::now_utc(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
