//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AliasService, StatsService};

/// Application state shared across all endpoints.
///
/// Constructed once at startup (see [`crate::server::run`]) and cloned into
/// each handler; the services share a single alias table underneath.
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService>,
    pub stats_service: Arc<StatsService>,
    /// Fallback host for short-URL construction when the request carries no
    /// usable `Host` header.
    pub default_host: String,
}

impl AppState {
    pub fn new(
        alias_service: Arc<AliasService>,
        stats_service: Arc<StatsService>,
        default_host: String,
    ) -> Self {
        Self {
            alias_service,
            stats_service,
            default_host,
        }
    }
}
