//! Error types for the decor search core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur during search operations.
///
/// Absence of matches is a valid empty result, never an error; the matcher
/// is total over well-typed input apart from the contract violations below.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The query violates the input contract (e.g. pathologically long)
    #[error("Invalid query: {0}")]
    InvalidArgument(String),
}

/// Errors that can occur in the query-history layer.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// Reading or writing the backing store failed
    #[error("History store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted history could not be (de)serialized
    #[error("History serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with SearchError
pub type MatcherResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with HistoryError
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
