//! Helper functions used across the application.
//!
//! - [`alias_generator`] - default alias generation (base-36 counter)
//! - [`request_host`] - short-URL construction from request headers

pub mod alias_generator;
pub mod request_host;
