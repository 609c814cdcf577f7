//! Person service — library crate for the person CRUD REST server.
//!
//! Re-exports all modules so the binary (`main.rs`) and `ms-e2e-tests`
//! can reach `AppState` and `build_router`.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
