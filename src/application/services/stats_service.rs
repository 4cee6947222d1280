//! Usage metrics derivation for stored aliases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::AliasRecord;
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;

/// A record together with its derived usage metrics.
#[derive(Debug, Clone)]
pub struct AliasUsage {
    pub record: AliasRecord,
    /// Whole days elapsed since creation, floored.
    pub age_in_days: i64,
    /// `clicks / max(1, age_in_days)`, rounded to two decimal places.
    /// The floored denominator avoids division by zero and inflated rates
    /// for same-day records.
    pub avg_clicks_per_day: f64,
}

/// Service computing click-rate statistics for aliases.
///
/// Read-only: looking up stats never touches the click counter. Metrics are
/// recomputed from the live record on every call, never cached.
pub struct StatsService {
    repository: Arc<dyn AliasRepository>,
}

impl StatsService {
    pub fn new(repository: Arc<dyn AliasRepository>) -> Self {
        Self { repository }
    }

    /// Returns the record and its usage metrics for the given alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown alias.
    pub async fn usage_for(&self, alias: &str) -> Result<AliasUsage, AppError> {
        let record = self
            .repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "alias": alias })))?;

        let (age_in_days, avg_clicks_per_day) = derive_usage(&record, Utc::now());

        Ok(AliasUsage {
            record,
            age_in_days,
            avg_clicks_per_day,
        })
    }
}

/// Computes `(age_in_days, avg_clicks_per_day)` for a record at `now`.
fn derive_usage(record: &AliasRecord, now: DateTime<Utc>) -> (i64, f64) {
    let age_in_days = (now - record.created_at).num_days().max(0);

    let denominator = age_in_days.max(1) as f64;
    let avg = record.clicks as f64 / denominator;
    let avg_clicks_per_day = (avg * 100.0).round() / 100.0;

    (age_in_days, avg_clicks_per_day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAliasRepository;
    use chrono::Duration;

    fn record_created_at(created_at: DateTime<Utc>, clicks: u64) -> AliasRecord {
        AliasRecord {
            id: "1".to_string(),
            original_url: "https://example.com".to_string(),
            alias: "demo".to_string(),
            created_at,
            clicks,
        }
    }

    #[test]
    fn test_same_day_record_uses_floored_denominator() {
        let now = Utc::now();
        let record = record_created_at(now - Duration::hours(3), 1);

        let (age, avg) = derive_usage(&record, now);
        assert_eq!(age, 0);
        assert_eq!(avg, 1.0);
    }

    #[test]
    fn test_age_is_floored_to_whole_days() {
        let now = Utc::now();
        let record = record_created_at(now - Duration::hours(59), 0);

        let (age, _) = derive_usage(&record, now);
        assert_eq!(age, 2);
    }

    #[test]
    fn test_average_rounded_to_two_decimals() {
        let now = Utc::now();
        let record = record_created_at(now - Duration::days(3), 10);

        let (age, avg) = derive_usage(&record, now);
        assert_eq!(age, 3);
        assert_eq!(avg, 3.33);
    }

    #[test]
    fn test_zero_clicks() {
        let now = Utc::now();
        let record = record_created_at(now - Duration::days(5), 0);

        let (_, avg) = derive_usage(&record, now);
        assert_eq!(avg, 0.0);
    }

    #[tokio::test]
    async fn test_usage_for_unknown_alias_is_not_found() {
        let mut repository = MockAliasRepository::new();
        repository.expect_find_by_alias().returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(repository));
        let result = service.usage_for("ghost").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_usage_for_does_not_mutate() {
        let mut repository = MockAliasRepository::new();
        let created_at = Utc::now();
        repository
            .expect_find_by_alias()
            .returning(move |_| Ok(Some(record_created_at(created_at, 4))));
        // No expectation on increment_clicks: any call would panic the mock.

        let service = StatsService::new(Arc::new(repository));
        let usage = service.usage_for("demo").await.unwrap();

        assert_eq!(usage.record.clicks, 4);
        assert_eq!(usage.age_in_days, 0);
        assert_eq!(usage.avg_clicks_per_day, 4.0);
    }
}
