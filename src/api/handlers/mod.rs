//! HTTP request handlers, one module per endpoint.

pub mod create;
pub mod redirect;
pub mod stats;

pub use create::{create_short_url_docs_handler, create_short_url_handler};
pub use redirect::redirect_handler;
pub use stats::{stats_handler, stats_method_not_allowed};
