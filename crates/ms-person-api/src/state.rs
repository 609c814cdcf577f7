//! Shared application state for the Axum server.
//!
//! Supports two modes:
//! - **Database mode**: uses `PgPool` for persistent storage (production).
//! - **In-memory mode**: uses `RwLock<BTreeMap>` keyed by person id (tests and development).

use std::collections::BTreeMap;
use std::sync::Arc;

use ms_common::Person;
use sqlx::PgPool;
use tokio::sync::RwLock;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool (None in test/in-memory mode).
    pub pool: Option<PgPool>,
    /// In-memory person table (used when pool is None).
    pub persons: Arc<RwLock<BTreeMap<i64, Person>>>,
}

impl AppState {
    /// Create state backed by a PostgreSQL pool.
    pub fn with_pool(pool: PgPool) -> Self {
        Self {
            pool: Some(pool),
            persons: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create empty in-memory state.
    pub fn new() -> Self {
        Self {
            pool: None,
            persons: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create in-memory state pre-populated with `persons`.
    ///
    /// Later entries replace earlier ones sharing an id.
    pub fn with_persons(persons: impl IntoIterator<Item = Person>) -> Self {
        let table = persons.into_iter().map(|p| (p.id, p)).collect();
        Self {
            pool: None,
            persons: Arc::new(RwLock::new(table)),
        }
    }

    /// Human-readable storage mode, for startup logging.
    pub fn storage_mode(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "in-memory"
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
