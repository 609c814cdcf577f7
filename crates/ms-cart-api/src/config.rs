//! Cart service configuration.

use ms_common::{ConfigResult, ServiceConfig};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8081;

/// Load the listen address from `HOST` / `PORT`.
pub fn from_env() -> ConfigResult<ServiceConfig> {
    ServiceConfig::from_env(DEFAULT_PORT)
}
