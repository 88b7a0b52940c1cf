//! Frontend Models
//!
//! Data structures matching the remote store's wire format.

use serde::{Deserialize, Serialize};

/// A single idea entry (matches the store's JSON array elements)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    /// Creation-timestamp-derived, unique within the list
    pub id: u64,
    pub title: String,
    /// Free text, may be empty
    #[serde(default)]
    pub details: String,
    /// Epoch milliseconds
    pub created: u64,
}

impl Idea {
    pub fn new(id: u64, title: String, created: u64) -> Self {
        Self {
            id,
            title,
            details: String::new(),
            created,
        }
    }
}
