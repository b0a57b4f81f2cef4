//! Bounded, de-duplicated recent-query history.
//!
//! Keeps the most recent free-text queries newest-first, capped at a
//! configured capacity, and mirrors every change into a
//! [`QueryHistoryStore`]. This is the only durable state the search
//! subsystem owns.

use crate::config::Config;
use crate::error::HistoryResult;
use crate::repositories::{JsonFileHistoryStore, QueryHistoryStore};
use std::sync::Mutex;
use tracing::warn;

/// Default number of recent queries kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Service managing the recent-query list.
pub struct QueryHistoryService {
    store: Box<dyn QueryHistoryStore>,
    capacity: usize,
    entries: Mutex<Vec<String>>,
}

impl QueryHistoryService {
    /// Create a service over `store`, loading any persisted entries.
    ///
    /// A store that fails to load degrades to an empty history with a
    /// warning; history must never take the search feature down.
    pub fn new(store: Box<dyn QueryHistoryStore>, capacity: usize) -> Self {
        let entries = match store.load() {
            Ok(mut loaded) => {
                loaded.truncate(capacity);
                loaded
            }
            Err(e) => {
                warn!(error = %e, "failed to load query history, starting empty");
                Vec::new()
            }
        };
        Self {
            store,
            capacity,
            entries: Mutex::new(entries),
        }
    }

    /// Create a file-backed service at the configured path and capacity.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(JsonFileHistoryStore::from_config(config)),
            config.history_capacity,
        )
    }

    /// Record a committed query at the front of the history.
    ///
    /// The query is trimmed; empty queries are ignored. An existing entry
    /// equal to it (case-insensitively) is removed first, then the list is
    /// truncated to capacity and persisted.
    pub fn record(&self, query: &str) -> HistoryResult<()> {
        let trimmed = query.trim();
        if trimmed.is_empty() || self.capacity == 0 {
            return Ok(());
        }

        let snapshot = match self.entries.lock() {
            Ok(mut entries) => {
                let lowered = trimmed.to_lowercase();
                entries.retain(|e| e.to_lowercase() != lowered);
                entries.insert(0, trimmed.to_string());
                entries.truncate(self.capacity);
                entries.clone()
            }
            Err(_) => return Ok(()),
        };
        self.store.save(&snapshot)
    }

    /// The recent queries, newest first.
    pub fn recent(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Drop all entries, in memory and in the store.
    pub fn clear(&self) -> HistoryResult<()> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
        self.store.save(&[])
    }

    /// Configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
