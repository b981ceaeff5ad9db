//! Conversion of application errors into JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, warn};

use changemaker_shared::{AmountError, AppError};

/// Error body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description.
    pub error: String,
    /// Stable machine-readable code.
    pub code: &'static str,
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
}

/// Handler error that renders as `{error, code, timestamp}` with the mapped status.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AmountError> for ApiError {
    fn from(err: AmountError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(error = %self.0, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.0.to_string(),
            code: self.0.error_code(),
            timestamp: Utc::now(),
        };

        (status, Json(body)).into_response()
    }
}
