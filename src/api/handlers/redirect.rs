//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL, counting the click.
///
/// # Endpoint
///
/// `GET /resolve-short-url/{alias}`
///
/// Responds `302 Found` with the original URL in the `Location` header.
/// Every successful resolution increments the record's click counter by
/// exactly one; repeated requests each count.
///
/// The 302 status is part of the endpoint contract, so the response is
/// assembled directly instead of going through [`axum::response::Redirect`],
/// whose helpers emit 303/307/308.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.alias_service.resolve(&alias).await?;

    debug!(alias = %alias, clicks = record.clicks, "redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url)],
    ))
}
