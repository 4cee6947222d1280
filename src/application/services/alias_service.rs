//! Alias creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::domain::entities::{AliasRecord, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;
use crate::utils::alias_generator::AliasGenerator;

/// How many generated candidates to try before giving up. Generated values
/// only collide with user-chosen custom aliases, so in practice the first
/// candidate wins.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating and resolving shortened URLs.
///
/// Owns the alias generator and coordinates it with the table so that a
/// generated alias can never silently duplicate a previously stored custom
/// alias: candidates already present in the table are skipped, and the
/// repository's own conflict check backstops the remaining race.
pub struct AliasService {
    repository: Arc<dyn AliasRepository>,
    generator: AliasGenerator,
}

impl AliasService {
    /// Creates a new alias service with a freshly seeded generator.
    pub fn new(repository: Arc<dyn AliasRepository>) -> Self {
        Self {
            repository,
            generator: AliasGenerator::new(),
        }
    }

    /// Creates a new alias record for the given URL.
    ///
    /// # Validation
    ///
    /// The URL must parse as an absolute URL with a scheme and a host.
    ///
    /// # Custom aliases
    ///
    /// When `custom_alias` is provided, the full table is checked first and
    /// a conflict error is returned if any record already uses it.
    /// Otherwise an alias is generated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing or malformed URL,
    /// [`AppError::Conflict`] for a taken custom alias, and
    /// [`AppError::Internal`] if alias generation is exhausted.
    pub async fn create_alias(
        &self,
        original_url: String,
        custom_alias: Option<String>,
    ) -> Result<AliasRecord, AppError> {
        let parsed = Url::parse(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;
        if !parsed.has_host() {
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "reason": "URL must be absolute with a host" }),
            ));
        }

        let alias = if let Some(custom) = custom_alias {
            if self.repository.find_by_alias(&custom).await?.is_some() {
                return Err(AppError::conflict(
                    "Alias already in use",
                    json!({ "alias": custom }),
                ));
            }
            custom
        } else {
            self.generate_unique_alias().await?
        };

        self.repository
            .create(NewAlias {
                original_url,
                alias,
            })
            .await
    }

    /// Resolves an alias for a redirect, counting the click.
    ///
    /// Every successful resolution increments the record's click counter by
    /// exactly one; there is no deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown alias.
    pub async fn resolve(&self, alias: &str) -> Result<AliasRecord, AppError> {
        self.repository
            .increment_clicks(alias)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "alias": alias })))
    }

    /// Lists every stored record in insertion order.
    pub async fn list(&self) -> Result<Vec<AliasRecord>, AppError> {
        self.repository.list().await
    }

    /// Produces a generated alias that is not yet present in the table.
    async fn generate_unique_alias(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = self.generator.next();
            if self.repository.find_by_alias(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            tracing::debug!(alias = %candidate, "generated alias already taken, skipping");
        }

        Err(AppError::internal(
            "Failed to generate a unique alias",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}
