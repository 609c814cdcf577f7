//! Health check endpoint.

/// Body returned by `GET /health`.
pub const HEALTH_MESSAGE: &str = "Product Service is up and running!";

/// GET /health — liveness check.
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}
