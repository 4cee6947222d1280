//! # Shortlink
//!
//! A demo URL shortening service built with Axum, backed by a
//! process-lifetime in-memory table.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the repository trait
//! - **Application Layer** ([`application`]) - Alias creation/resolution
//!   logic and usage-metric derivation
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory alias
//!   table
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Custom or generated aliases (base-36 counter, collision-checked
//!   against stored custom aliases)
//! - Atomic click counting on redirect
//! - Live usage statistics (age, average clicks per day)
//! - Permissive CORS on every endpoint
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//! export DEFAULT_HOST="localhost:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasService, StatsService};
    pub use crate::domain::entities::{AliasRecord, NewAlias};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryAliasRepository;
    pub use crate::state::AppState;
}
