//! Core domain entities.
//!
//! - [`AliasRecord`] - a stored shortened-URL record
//! - [`NewAlias`] - input data for creating a record

pub mod alias;

pub use alias::{AliasRecord, NewAlias};
