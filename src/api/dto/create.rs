//! DTOs for the short-URL creation endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::AliasRecord;

/// Compiled regex for custom alias validation.
static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to create a shortened URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlRequest {
    /// The original URL to shorten. Optional at the serde level so a missing
    /// field surfaces as a 400 validation error instead of a decode failure.
    pub url: Option<String>,

    /// Optional custom alias (validated for length and characters).
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(
        path = "*CUSTOM_ALIAS_REGEX",
        message = "Alias may only contain letters, digits, hyphens, and underscores"
    ))]
    pub custom_alias: Option<String>,
}

/// Successful creation response: the full stored record plus its short URL.
#[derive(Debug, Serialize)]
pub struct CreateShortUrlResponse {
    pub success: bool,
    pub data: AliasData,
}

/// Wire representation of a stored record, including the reconstructed
/// absolute short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasData {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub alias: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl AliasData {
    pub fn from_record(record: AliasRecord, short_url: String) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_url,
            alias: record.alias,
            created_at: record.created_at,
            clicks: record.clicks,
        }
    }
}

/// Documentation payload returned by `GET /create-short-url`.
#[derive(Debug, Serialize)]
pub struct CreateShortUrlDocs {
    pub success: bool,
    pub message: String,
    pub endpoints: Value,
    pub data: Vec<AliasData>,
}
