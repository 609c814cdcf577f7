//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Convenience alias for config results.
pub type ConfigResult<T> = Result<T, ConfigError>;
