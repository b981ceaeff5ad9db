//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

/// Greeting returned from the root path.
pub const WELCOME_MESSAGE: &str =
    "Coin change service is running. Try GET /change/{dollars}/{cents}";

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Greeting, only set on the root path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    /// Service version.
    pub version: &'static str,
    /// Seconds since the service started.
    pub uptime_secs: i64,
    /// Time the response was produced.
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    fn healthy(state: &AppState, message: Option<&'static str>) -> Self {
        let now = Utc::now();
        Self {
            status: "healthy",
            message,
            version: state.service.version,
            uptime_secs: (now - state.service.started_at).num_seconds(),
            timestamp: now,
        }
    }
}

/// Root handler: health plus a greeting.
async fn hello(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(&state, Some(WELCOME_MESSAGE)))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(&state, None))
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
}
