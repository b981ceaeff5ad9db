//! Coin change routes.

use axum::{
    Json, Router,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer, ser::SerializeMap};
use tracing::debug;

use changemaker_core::change::{ChangeBreakdown, CoinCount, make_change};
use changemaker_shared::{Amount, AppError};

use crate::{AppState, error::ApiError};

/// Creates the change routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/change/{dollars}/{cents}", get(get_change))
}

/// One coin entry, serialized as a single-key object: `{"5": "quarters"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinEntry(pub CoinCount);

impl Serialize for CoinEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.count.to_string(), self.0.denomination.plural_name())?;
        map.end()
    }
}

/// Response for a change calculation.
#[derive(Debug, Serialize)]
pub struct ChangeResponse {
    /// The requested amount, e.g. "$1.34".
    pub input: String,
    /// Coins, highest denomination first.
    pub change: Vec<CoinEntry>,
    /// Time the response was produced.
    pub timestamp: DateTime<Utc>,
}

impl ChangeResponse {
    fn new(amount: Amount, breakdown: ChangeBreakdown) -> Self {
        Self {
            input: amount.to_string(),
            change: breakdown.into_iter().map(CoinEntry).collect(),
            timestamp: Utc::now(),
        }
    }
}

/// Amount taken from the `{dollars}/{cents}` path segments.
///
/// Every failure, including segments that are not valid UTF-8 once
/// percent-decoded, is rejected as a JSON validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountPath(pub Amount);

impl<S> FromRequestParts<S> for AmountPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((dollars, cents)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(Self(Amount::parse_parts(&dollars, &cents)?))
    }
}

/// GET `/change/{dollars}/{cents}` - Break an amount into coins.
async fn get_change(AmountPath(amount): AmountPath) -> Json<ChangeResponse> {
    let breakdown = make_change(amount);

    debug!(
        amount = %amount,
        coins = breakdown.coin_count(),
        "Calculated change"
    );

    Json(ChangeResponse::new(amount, breakdown))
}
