#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use shortlink::api::handlers::{
    create_short_url_docs_handler, create_short_url_handler, redirect_handler, stats_handler,
    stats_method_not_allowed,
};
use shortlink::application::services::{AliasService, StatsService};
use shortlink::domain::entities::{AliasRecord, NewAlias};
use shortlink::domain::repositories::AliasRepository;
use shortlink::infrastructure::persistence::MemoryAliasRepository;
use shortlink::state::AppState;

/// Builds an [`AppState`] over a fresh, empty alias table, returning the
/// table too so tests can seed and inspect it directly.
pub fn create_test_state() -> (AppState, Arc<MemoryAliasRepository>) {
    let repository = Arc::new(MemoryAliasRepository::new());

    let alias_service = Arc::new(AliasService::new(repository.clone()));
    let stats_service = Arc::new(StatsService::new(repository.clone()));

    let state = AppState::new(alias_service, stats_service, "short.test".to_string());

    (state, repository)
}

/// Same as [`create_test_state`] but with the fixed seed records loaded.
pub fn create_seeded_test_state() -> (AppState, Arc<MemoryAliasRepository>) {
    let repository = Arc::new(MemoryAliasRepository::with_seed_records());

    let alias_service = Arc::new(AliasService::new(repository.clone()));
    let stats_service = Arc::new(StatsService::new(repository.clone()));

    let state = AppState::new(alias_service, stats_service, "short.test".to_string());

    (state, repository)
}

/// The full route table, mirroring `shortlink::routes::app_router` without
/// the outer middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/create-short-url",
            post(create_short_url_handler).get(create_short_url_docs_handler),
        )
        .route("/resolve-short-url/{alias}", get(redirect_handler))
        .route(
            "/short-url-stats/{alias}",
            get(stats_handler).fallback(stats_method_not_allowed),
        )
        .with_state(state)
}

/// Inserts a record directly into the table, bypassing the HTTP surface.
pub async fn create_test_alias(
    repository: &MemoryAliasRepository,
    alias: &str,
    url: &str,
) -> AliasRecord {
    repository
        .create(NewAlias {
            original_url: url.to_string(),
            alias: alias.to_string(),
        })
        .await
        .unwrap()
}
