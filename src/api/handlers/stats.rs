//! Handler for short URL usage statistics.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use serde_json::json;

use crate::api::dto::stats::{StatsData, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::build_short_url;

/// Returns usage statistics for a short URL without counting a click.
///
/// # Endpoint
///
/// `GET /short-url-stats/{alias}`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": "1",
///     "originalUrl": "https://example.com/page",
///     "shortUrl": "http://localhost:3000/resolve-short-url/lfls",
///     "alias": "lfls",
///     "createdAt": "2026-01-01T00:00:00Z",
///     "clicks": 3,
///     "stats": { "avgClicksPerDay": 3.0, "ageInDays": 0 }
///   }
/// }
/// ```
///
/// `ageInDays` and `avgClicksPerDay` are recomputed on every call.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
/// Non-GET requests are routed to [`stats_method_not_allowed`].
pub async fn stats_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    let usage = state.stats_service.usage_for(&alias).await?;
    let short_url = build_short_url(&headers, &state.default_host, &usage.record.alias);

    Ok(Json(StatsResponse {
        success: true,
        data: StatsData::from_usage(usage, short_url),
    }))
}

/// Method fallback for the stats route: anything but GET gets a 405 with the
/// standard error body and no side effects.
pub async fn stats_method_not_allowed() -> AppError {
    AppError::method_not_allowed("Stats endpoint only supports GET", json!({}))
}
