//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before the server binds.
//!
//! ## Variables
//!
//! All optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `DEFAULT_HOST` - Host used in short URLs when the request carries no
//!   `Host` header (default: `localhost:3000`)
//! - `RUST_LOG` - Log filter (default: `info`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to (`LISTEN`).
    pub listen_addr: SocketAddr,
    /// Fallback host for short-URL construction (`DEFAULT_HOST`).
    pub default_host: String,
}

impl Config {
    /// Loads and validates configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN` is set but does not parse as a socket
    /// address.
    pub fn from_env() -> Result<Self> {
        let listen = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let listen_addr = listen
            .parse()
            .with_context(|| format!("invalid LISTEN address: {listen}"))?;

        let default_host =
            env::var("DEFAULT_HOST").unwrap_or_else(|_| "localhost:3000".to_string());

        Ok(Self {
            listen_addr,
            default_host,
        })
    }
}
