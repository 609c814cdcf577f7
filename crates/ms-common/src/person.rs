//! Person wire record.

use serde::{Deserialize, Serialize};

/// A person as submitted by clients and returned by the person service.
///
/// `id` is client-supplied and required. Submitting an existing `id` replaces the
/// stored record. A missing `name` is stored as null and a missing `age` as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: i32,
}

impl Person {
    pub fn new(id: i64, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: Some(name.into()),
            age,
        }
    }
}
