//! Debounced search invocation with last-writer-wins ordering.
//!
//! The admin UI calls [`SearchContext::submit`] on every keystroke. Each
//! submission gets a monotonically increasing sequence number; only the
//! submission that is still newest once its debounce window elapses runs
//! the matcher and commits results. Ordering is keyed by sequence number,
//! never by wall-clock completion order, so a stale slow search can never
//! overwrite a newer one.

use crate::config::Config;
use crate::error::MatcherResult;
use crate::models::Dataset;
use crate::search::{search, SearchResults};
use crate::services::query_history::QueryHistoryService;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

/// Cached query/result slots, overwritten atomically on each commit.
#[derive(Default)]
struct ContextState {
    query: String,
    results: SearchResults,
}

/// Stateful session object gating matcher invocation behind a debounce
/// window. Constructed once per session and shared by reference.
pub struct SearchContext {
    debounce: Duration,
    seq: AtomicU64,
    state: Mutex<ContextState>,
    history: Option<Arc<QueryHistoryService>>,
}

impl SearchContext {
    /// Create a context with the given debounce window.
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            seq: AtomicU64::new(0),
            state: Mutex::new(ContextState::default()),
            history: None,
        }
    }

    /// Create a context from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Duration::from_millis(config.debounce_ms))
    }

    /// Record every committed non-empty query into `history`.
    pub fn with_history(mut self, history: Arc<QueryHistoryService>) -> Self {
        self.history = Some(history);
        self
    }

    /// Submit a query against a dataset snapshot.
    ///
    /// Returns `Ok(Some(results))` if this submission was still the newest
    /// when its debounce window elapsed, `Ok(None)` if a later submission
    /// superseded it. A whitespace-only query clears the cached results
    /// immediately, without waiting out the window.
    ///
    /// # Errors
    /// Propagates the matcher's `InvalidArgument` for over-long queries.
    pub async fn submit(
        &self,
        dataset: &Dataset,
        query: &str,
    ) -> MatcherResult<Option<SearchResults>> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        // Clearing applies immediately; any in-flight older search now
        // fails its sequence check and drops its results.
        if query.trim().is_empty() {
            let results = SearchResults::default();
            if !self.commit(seq, query, &results) {
                debug!("clear superseded by a newer submission");
                return Ok(None);
            }
            return Ok(Some(results));
        }

        tokio::time::sleep(self.debounce).await;
        if self.seq.load(Ordering::SeqCst) != seq {
            debug!(query, "query superseded during debounce window");
            return Ok(None);
        }

        let results = search(dataset, query)?;
        if !self.commit(seq, query, &results) {
            debug!(query, "query superseded after matching");
            return Ok(None);
        }

        if let Some(ref history) = self.history {
            if let Err(e) = history.record(query) {
                warn!(error = %e, "failed to record query history");
            }
        }
        Ok(Some(results))
    }

    /// Store results for `seq` if it is still the newest submission.
    fn commit(&self, seq: u64, query: &str, results: &SearchResults) -> bool {
        if let Ok(mut state) = self.state.lock() {
            if self.seq.load(Ordering::SeqCst) != seq {
                return false;
            }
            state.query = query.to_string();
            state.results = results.clone();
            true
        } else {
            false
        }
    }

    /// The most recently committed query.
    pub fn current_query(&self) -> String {
        self.state
            .lock()
            .map(|state| state.query.clone())
            .unwrap_or_default()
    }

    /// The most recently committed results.
    pub fn results(&self) -> SearchResults {
        self.state
            .lock()
            .map(|state| state.results.clone())
            .unwrap_or_default()
    }

    /// Discard cached state and invalidate all in-flight submissions.
    pub fn reset(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut state) = self.state.lock() {
            *state = ContextState::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;

    fn sample_dataset() -> Dataset {
        let mut event = Event::new("1", "Elegant Garden Wedding");
        event.category = "Weddings".to_string();
        Dataset {
            events: vec![event],
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_commits_results() {
        let context = SearchContext::new(Duration::from_millis(300));
        let dataset = sample_dataset();

        let results = context.submit(&dataset, "garden").await.unwrap();
        assert_eq!(results.unwrap().total_results, 1);
        assert_eq!(context.current_query(), "garden");
        assert_eq!(context.results().total_results, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_commits_immediately() {
        let context = SearchContext::new(Duration::from_millis(300));
        let dataset = sample_dataset();

        context.submit(&dataset, "garden").await.unwrap();
        let cleared = context.submit(&dataset, "   ").await.unwrap();
        assert_eq!(cleared.unwrap().total_results, 0);
        assert!(context.results().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_superseded_clear_does_not_commit() {
        let context = Arc::new(SearchContext::new(Duration::ZERO));
        let dataset = Arc::new(sample_dataset());

        // Park the clear inside its commit by holding the state lock,
        // then out-sequence it before letting it through.
        let guard = context.state.lock().unwrap();
        let ctx = context.clone();
        let data = dataset.clone();
        let clear = tokio::spawn(async move { ctx.submit(&data, "").await });
        while context.seq.load(Ordering::SeqCst) == 0 {
            std::thread::sleep(Duration::from_millis(1));
        }
        context.seq.fetch_add(1, Ordering::SeqCst);
        drop(guard);

        let outcome = clear.await.unwrap().unwrap();
        assert!(outcome.is_none(), "a superseded clear must not report a commit");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_clears_state() {
        let context = SearchContext::new(Duration::from_millis(10));
        let dataset = sample_dataset();

        context.submit(&dataset, "garden").await.unwrap();
        context.reset();
        assert_eq!(context.current_query(), "");
        assert!(context.results().is_empty());
    }
}
