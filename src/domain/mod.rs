//! Domain layer containing the core data model.
//!
//! Defines entities and the repository interface independent of
//! infrastructure concerns. Business logic lives in
//! [`crate::application::services`]; concrete storage lives in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
