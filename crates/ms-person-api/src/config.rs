//! Person service configuration.

use ms_common::config::parse_var;
use ms_common::{ConfigResult, ServiceConfig};
use serde::Deserialize;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8080;

/// Top-level person service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonConfig {
    /// Listen address.
    #[serde(flatten)]
    pub service: ServiceConfig,
    /// PostgreSQL connection URL. `None` selects the in-memory store.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

impl PersonConfig {
    /// Load config from environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup (tests pass a closure).
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            service: ServiceConfig::from_lookup(DEFAULT_PORT, &lookup)?,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            db_max_connections: parse_var(
                &lookup,
                "DB_MAX_CONNECTIONS",
                default_max_connections(),
            )?,
        })
    }
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::with_port(DEFAULT_PORT),
            database_url: None,
            db_max_connections: default_max_connections(),
        }
    }
}
