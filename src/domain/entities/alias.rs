//! Alias entity representing a shortened URL record.

use chrono::{DateTime, Utc};

/// A stored shortened-URL record.
///
/// Associates a short alias with its original URL plus usage metadata.
/// `id` and `created_at` are assigned by the store at insertion and are
/// immutable afterwards; `clicks` only ever moves upward, once per
/// successful redirect.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasRecord {
    pub id: String,
    pub original_url: String,
    pub alias: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

/// Input data for creating a new alias record.
///
/// The store fills in `id`, `created_at`, and the zeroed click counter.
#[derive(Debug, Clone)]
pub struct NewAlias {
    pub original_url: String,
    pub alias: String,
}
