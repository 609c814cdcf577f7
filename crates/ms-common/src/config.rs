//! Listen-address configuration shared by every service binary.

use std::fmt::Display;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Where a service binds its HTTP listener.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl ServiceConfig {
    /// Config bound to the default host and the given port.
    pub fn with_port(port: u16) -> Self {
        Self {
            host: default_host(),
            port,
        }
    }

    /// Load from `HOST` / `PORT`, falling back to `default_port`.
    pub fn from_env(default_port: u16) -> ConfigResult<Self> {
        Self::from_lookup(default_port, |key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (tests pass a map here).
    pub fn from_lookup<F>(default_port: u16, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(default_host),
            port: parse_var(&lookup, "PORT", default_port)?,
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse an optional variable, returning `default` when it is unset.
pub fn parse_var<T, F>(lookup: &F, key: &'static str, default: T) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key,
                value: raw,
                reason: e.to_string(),
            }),
    }
}
