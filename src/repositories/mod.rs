//! Persistence layer for the search subsystem.
//!
//! The only durable artifact the search core owns is the recent-query
//! history; everything else is recomputed per call.

pub mod json_history_store;
pub mod traits;

pub use json_history_store::JsonFileHistoryStore;
pub use traits::QueryHistoryStore;
