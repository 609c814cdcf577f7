//! Health check endpoints.

/// Body returned by `GET /health`.
pub const HEALTH_MESSAGE: &str = "Cart Service is up and running!";

/// Body returned by `GET /`.
pub const STATUS_MESSAGE: &str = "Cart Service is operational.";

/// GET /health — liveness check.
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// GET / — operational status banner.
pub async fn status() -> &'static str {
    STATUS_MESSAGE
}
