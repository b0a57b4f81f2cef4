//! Storage abstraction for the persisted query history.
//!
//! The history service talks to storage only through this trait, so tests
//! can swap in an in-memory mock and the production path stays a plain
//! JSON file.

use crate::error::HistoryResult;

/// Durable storage for the recent-query list.
pub trait QueryHistoryStore: Send + Sync {
    /// Load the persisted history, newest first.
    ///
    /// A missing store is an empty history, not an error.
    fn load(&self) -> HistoryResult<Vec<String>>;

    /// Replace the persisted history with `entries` (newest first).
    fn save(&self, entries: &[String]) -> HistoryResult<()>;
}
