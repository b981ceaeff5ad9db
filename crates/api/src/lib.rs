//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for health and coin change
//! - JSON error responses
//! - Router construction with tracing and CORS layers

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Static facts about the running service.
    pub service: Arc<ServiceInfo>,
}

/// Facts about the running service reported by the health endpoints.
#[derive(Debug)]
pub struct ServiceInfo {
    /// Crate version.
    pub version: &'static str,
    /// When the process started serving.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates state stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: Arc::new(ServiceInfo {
                version: env!("CARGO_PKG_VERSION"),
                started_at: Utc::now(),
            }),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::{AppState, create_router};

    /// Sends a GET through the full router and returns status plus JSON body.
    pub async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = create_router(AppState::new());

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    /// Asserts that `value` is an RFC 3339 UTC timestamp string.
    pub fn assert_timestamp(value: &Value) {
        let text = value.as_str().expect("timestamp should be a string");
        chrono::DateTime::parse_from_rfc3339(text).expect("timestamp should be RFC 3339");
    }
}
