//! In-memory alias table.
//!
//! The only state in the service: a process-lifetime, insertion-ordered
//! table of [`AliasRecord`]s behind a `std::sync::RwLock`. Nothing is
//! persisted; a restart starts over from the seed records.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{AliasRecord, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;

/// Example records the table starts with. Their ids carry a `seed-` prefix
/// so they are distinguishable from user-created records.
const SEED_RECORDS: &[(&str, &str)] = &[
    ("example", "https://example.com"),
    ("rust", "https://www.rust-lang.org"),
    ("axum", "https://docs.rs/axum"),
];

struct TableInner {
    /// Insertion-ordered; alias lookups are a linear scan ("first match
    /// wins"), which also makes the conflict check cover every record.
    records: Vec<AliasRecord>,
}

/// Process-lifetime in-memory implementation of [`AliasRepository`].
///
/// All mutation happens under the write lock, so the click-counter
/// read-modify-write is atomic and concurrent redirects never lose
/// updates. No lock is held across an await point.
pub struct MemoryAliasRepository {
    inner: RwLock<TableInner>,
    next_id: AtomicU64,
}

impl MemoryAliasRepository {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TableInner {
                records: Vec::new(),
            }),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a table pre-populated with the fixed seed records.
    pub fn with_seed_records() -> Self {
        let repository = Self::new();
        {
            let mut inner = repository
                .inner
                .write()
                .expect("fresh lock cannot be poisoned");
            let now = Utc::now();
            for (n, (alias, url)) in SEED_RECORDS.iter().enumerate() {
                inner.records.push(AliasRecord {
                    id: format!("seed-{}", n + 1),
                    original_url: (*url).to_string(),
                    alias: (*alias).to_string(),
                    created_at: now,
                    clicks: 0,
                });
            }
        }
        repository
    }

    fn lock_poisoned() -> AppError {
        AppError::internal("Alias table lock poisoned", json!({}))
    }
}

impl Default for MemoryAliasRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AliasRepository for MemoryAliasRepository {
    async fn create(&self, new_alias: NewAlias) -> Result<AliasRecord, AppError> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_poisoned())?;

        // Conflict check covers the full table, seeds included.
        if inner.records.iter().any(|r| r.alias == new_alias.alias) {
            return Err(AppError::conflict(
                "Alias already in use",
                json!({ "alias": new_alias.alias }),
            ));
        }

        let record = AliasRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed).to_string(),
            original_url: new_alias.original_url,
            alias: new_alias.alias,
            created_at: Utc::now(),
            clicks: 0,
        };
        inner.records.push(record.clone());

        Ok(record)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>, AppError> {
        let inner = self.inner.read().map_err(|_| Self::lock_poisoned())?;
        Ok(inner.records.iter().find(|r| r.alias == alias).cloned())
    }

    async fn list(&self) -> Result<Vec<AliasRecord>, AppError> {
        let inner = self.inner.read().map_err(|_| Self::lock_poisoned())?;
        Ok(inner.records.clone())
    }

    async fn increment_clicks(&self, alias: &str) -> Result<Option<AliasRecord>, AppError> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_poisoned())?;
        Ok(inner
            .records
            .iter_mut()
            .find(|r| r.alias == alias)
            .map(|record| {
                record.clicks += 1;
                record.clone()
            }))
    }
}
