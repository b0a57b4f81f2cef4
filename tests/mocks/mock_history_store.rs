//! In-memory mock of the query history store.

use decor_search::error::HistoryResult;
use decor_search::QueryHistoryStore;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory store recording how it was used; can be told to fail.
#[derive(Default)]
pub struct MockHistoryStore {
    entries: Mutex<Vec<String>>,
    save_calls: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MockHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with persisted entries (newest first).
    pub fn with_entries(entries: &[&str]) -> Self {
        let store = Self::new();
        *store.entries.lock().unwrap() = entries.iter().map(|e| e.to_string()).collect();
        store
    }

    /// Make every subsequent `save` fail.
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    /// Number of times `save` was called.
    pub fn save_call_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Current persisted entries.
    pub fn saved_entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl QueryHistoryStore for MockHistoryStore {
    fn load(&self) -> HistoryResult<Vec<String>> {
        Ok(self.entries.lock().unwrap().clone())
    }

    fn save(&self, entries: &[String]) -> HistoryResult<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "mock save failure").into());
        }
        *self.entries.lock().unwrap() = entries.to_vec();
        Ok(())
    }
}
