//! Server configuration from the environment.
//!
//! The Leptos options (site root, default address) come from
//! `[package.metadata.leptos]` or `LEPTOS_*` variables. `SITE_ADDR` replaces
//! the listen address and `PORT` replaces just its port; blank values are
//! ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SITE_ADDR `{value}`: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("invalid PORT `{value}`: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read `SITE_ADDR` and `PORT`, falling back to `default_addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either variable is set but unparsable.
    pub fn from_env(default_addr: SocketAddr) -> Result<Self, ConfigError> {
        let site_addr = std::env::var("SITE_ADDR").ok();
        let port = std::env::var("PORT").ok();
        Self::resolve(default_addr, site_addr.as_deref(), port.as_deref())
    }

    /// Apply optional overrides to `default_addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an override is present but unparsable.
    pub fn resolve(
        default_addr: SocketAddr,
        site_addr: Option<&str>,
        port: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut addr = match site_addr.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidAddr {
                value: value.to_owned(),
                source,
            })?,
            None => default_addr,
        };

        if let Some(value) = port.map(str::trim).filter(|v| !v.is_empty()) {
            let port: u16 = value.parse().map_err(|source| ConfigError::InvalidPort {
                value: value.to_owned(),
                source,
            })?;
            addr.set_port(port);
        }

        Ok(Self { addr })
    }
}
