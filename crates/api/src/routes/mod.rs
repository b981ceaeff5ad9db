//! API route definitions.

use axum::{Router, http::Uri};

use changemaker_shared::AppError;

use crate::{AppState, error::ApiError};

pub mod change;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(change::routes())
}

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::NotFound(format!("no route for {}", uri.path())).into()
}
