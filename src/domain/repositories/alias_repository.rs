//! Repository trait for alias record data access.

use crate::domain::entities::{AliasRecord, NewAlias};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the alias table.
///
/// Defines the operations the three endpoints need: insertion, lookup by
/// alias, full listing, and the click-counter increment. Lookup is by alias,
/// never by id — the id is an internal key from the public API's
/// perspective.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryAliasRepository`] -
///   process-lifetime in-memory table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Inserts a new record, assigning its id, creation timestamp, and a
    /// zeroed click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Internal`] if the table is unavailable.
    async fn create(&self, new_alias: NewAlias) -> Result<AliasRecord, AppError>;

    /// Finds the first record whose alias matches, in insertion order.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(AliasRecord))` if found
    /// - `Ok(None)` if not found
    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>, AppError>;

    /// Lists all records in insertion order, reflecting live table state at
    /// call time.
    async fn list(&self) -> Result<Vec<AliasRecord>, AppError>;

    /// Atomically increments the click counter of the record with the given
    /// alias, preserving all other fields.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(AliasRecord))` with the updated record
    /// - `Ok(None)` if no record matches the alias
    async fn increment_clicks(&self, alias: &str) -> Result<Option<AliasRecord>, AppError>;
}
