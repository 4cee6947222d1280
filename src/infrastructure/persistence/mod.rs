//! Concrete repository implementations.
//!
//! - [`MemoryAliasRepository`] - process-lifetime in-memory alias table

pub mod memory_alias_repository;

pub use memory_alias_repository::MemoryAliasRepository;
