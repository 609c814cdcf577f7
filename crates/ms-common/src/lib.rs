//! Shared building blocks for the person, cart and product services.
//!
//! - `Person` wire record (used by the person service and the e2e tests)
//! - `ServiceConfig` listen-address loading from the environment
//! - tracing initialisation and graceful-shutdown signal for the binaries

pub mod config;
pub mod error;
pub mod person;
pub mod shutdown;
pub mod telemetry;

pub use config::ServiceConfig;
pub use error::{ConfigError, ConfigResult};
pub use person::Person;
pub use shutdown::shutdown_signal;
