//! Product service — liveness endpoints.

pub mod config;
pub mod routes;
