//! DTOs for the stats endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::AliasUsage;

/// Response for `GET /short-url-stats/{alias}`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub data: StatsData,
}

/// Stored fields plus derived usage metrics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub alias: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
    pub stats: UsageStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub avg_clicks_per_day: f64,
    pub age_in_days: i64,
}

impl StatsData {
    pub fn from_usage(usage: AliasUsage, short_url: String) -> Self {
        Self {
            id: usage.record.id,
            original_url: usage.record.original_url,
            short_url,
            alias: usage.record.alias,
            created_at: usage.record.created_at,
            clicks: usage.record.clicks,
            stats: UsageStats {
                avg_clicks_per_day: usage.avg_clicks_per_day,
                age_in_days: usage.age_in_days,
            },
        }
    }
}
