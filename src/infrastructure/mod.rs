//! Infrastructure layer implementing the domain's repository interface.

pub mod persistence;
