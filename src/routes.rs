//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /create-short-url`            - Create a shortened URL
//! - `GET  /create-short-url`            - Documentation payload + record list
//! - `GET  /resolve-short-url/{alias}`   - 302 redirect, counts a click
//! - `GET  /short-url-stats/{alias}`     - Usage metrics (GET only, 405 otherwise)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive (`Access-Control-Allow-Origin: *`, any method,
//!   any header); preflight `OPTIONS` requests are short-circuited
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    create_short_url_docs_handler, create_short_url_handler, redirect_handler, stats_handler,
    stats_method_not_allowed,
};
use crate::api::middleware::trace;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
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
        .layer(cors)
        .layer(trace::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
