use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::dashboard::AppState;
use crate::weather::openweather::usable_api_key;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: chrono::DateTime<chrono::Utc>,
    /// "live" when an API key is configured, otherwise "demo_mode"
    weather: &'static str,
    city: String,
}

/// GET /health - service status without touching the weather API
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let has_key = usable_api_key(state.cfg.weather.api_key.as_deref()).is_some();

    let response = HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now(),
        weather: if has_key { "live" } else { "demo_mode" },
        city: state.dashboard.city().to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /health/ready - Readiness check
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /health/live - Liveness check
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
