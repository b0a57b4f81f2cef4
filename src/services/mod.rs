//! Stateful services layered over the pure search core.
//!
//! - `search_context`: debounced matcher invocation with
//!   last-writer-wins ordering
//! - `query_history`: bounded recent-query list backed by a store

pub mod query_history;
pub mod search_context;

pub use query_history::{QueryHistoryService, DEFAULT_HISTORY_CAPACITY};
pub use search_context::SearchContext;
