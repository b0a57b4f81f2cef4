//! Decor Search - the cross-entity search core of an event-decoration
//! back-office.
//!
//! Given a snapshot of the five record collections the admin pages own
//! (events, services, clients, inquiries, portfolio items) and a free-text
//! query, this crate produces ranked, grouped results with structured
//! highlight spans, plus query suggestions, a debounced invocation context
//! and a persisted recent-query history.
//!
//! # Architecture
//!
//! - **models**: entity structs, the closed `Record` union, the `Dataset`
//!   snapshot
//! - **search**: the pure matcher, highlighting, suggestions
//! - **services**: the debounced `SearchContext` and the query history
//! - **repositories**: the history storage trait and its JSON file impl
//! - **error**: custom error types for precise error handling
//! - **config**: configuration from environment variables

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, HistoryError, SearchError};
pub use models::{
    Client, Dataset, Event, EventStatus, Inquiry, InquiryStatus, PortfolioItem, Record,
    RecordType, Service,
};
pub use repositories::{JsonFileHistoryStore, QueryHistoryStore};
pub use search::{
    highlight, search, suggest, suggest_with_config, HighlightSpan, SearchResult, SearchResults,
};
pub use services::{QueryHistoryService, SearchContext};
