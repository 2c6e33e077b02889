//! In-memory storage of generated username records.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A successful generation outcome retained for retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecord {
    /// Theme the usernames were generated for
    theme: String,
    /// The generated usernames
    usernames: Vec<String>,
    /// When the result was recorded
    generated_at: DateTime<Utc>,
}

impl GeneratedRecord {
    /// Creates a new record.
    pub fn new(
        theme: impl Into<String>,
        usernames: Vec<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            theme: theme.into(),
            usernames,
            generated_at,
        }
    }
}

/// Store of generation records keyed by request id.
///
/// A HashMap protected by an RwLock for thread-safe access. All data is
/// lost when the process stops; re-recording a request id replaces the
/// previous record.
#[derive(Debug, Clone, Default)]
pub struct UsernameStore {
    records: Arc<RwLock<HashMap<String, GeneratedRecord>>>,
}

impl UsernameStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under the given request id.
    pub async fn insert(&self, request_id: impl Into<String>, record: GeneratedRecord) {
        self.records.write().await.insert(request_id.into(), record);
    }

    /// Returns the record for a request id, if one was stored.
    pub async fn get(&self, request_id: &str) -> Option<GeneratedRecord> {
        self.records.read().await.get(request_id).cloned()
    }

    /// Get the number of stored records (for testing).
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Check if the store is empty (for testing).
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
