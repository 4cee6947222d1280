//! Handlers for the short-URL creation endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::create::{
    AliasData, CreateShortUrlDocs, CreateShortUrlRequest, CreateShortUrlResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::build_short_url;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /create-short-url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "customAlias": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the full stored record:
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
///     "clicks": 0
///   }
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for a missing or malformed URL, or a bad alias format
/// - 409 Conflict when the custom alias is already taken
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    payload.validate()?;

    let url = payload
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing url", json!({ "field": "url" })))?;

    let record = state
        .alias_service
        .create_alias(url, payload.custom_alias)
        .await?;

    tracing::info!(alias = %record.alias, id = %record.id, "short URL created");

    let short_url = build_short_url(&headers, &state.default_host, &record.alias);

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            success: true,
            data: AliasData::from_record(record, short_url),
        }),
    ))
}

/// Returns a documentation payload listing the existing records.
///
/// # Endpoint
///
/// `GET /create-short-url`
pub async fn create_short_url_docs_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CreateShortUrlDocs>, AppError> {
    let data = state
        .alias_service
        .list()
        .await?
        .into_iter()
        .map(|record| {
            let short_url = build_short_url(&headers, &state.default_host, &record.alias);
            AliasData::from_record(record, short_url)
        })
        .collect();

    Ok(Json(CreateShortUrlDocs {
        success: true,
        message: "POST a JSON body {\"url\": \"...\", \"customAlias\": \"...\"} to create a short URL"
            .to_string(),
        endpoints: json!({
            "create": "POST /create-short-url",
            "redirect": "GET /resolve-short-url/{alias}",
            "stats": "GET /short-url-stats/{alias}",
        }),
        data,
    }))
}
