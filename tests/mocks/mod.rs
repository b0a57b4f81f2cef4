//! Shared test doubles for integration tests.

mod mock_history_store;

pub use mock_history_store::MockHistoryStore;
