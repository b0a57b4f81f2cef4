//! Configuration for the decor search core.
//!
//! This module handles loading and validating configuration from environment
//! variables. All settings have sensible defaults; none are required.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Upper bound accepted for the debounce window, in milliseconds.
const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Upper bound accepted for the history capacity.
const MAX_HISTORY_CAPACITY: usize = 100;

/// Configuration for the search core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Debounce window for search invocation in milliseconds (default: 300)
    pub debounce_ms: u64,

    /// Maximum number of query suggestions to return (default: 5)
    pub max_suggestions: usize,

    /// Maximum number of recent queries kept in history (default: 10)
    pub history_capacity: usize,

    /// Path of the JSON file backing the query history
    /// (default: "decor_search_history.json")
    pub history_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DECOR_DEBOUNCE_MS`: Debounce window in milliseconds (default: 300)
    /// - `DECOR_MAX_SUGGESTIONS`: Max suggestion entries (default: 5)
    /// - `DECOR_HISTORY_CAPACITY`: Recent-query history size (default: 10)
    /// - `DECOR_HISTORY_PATH`: History file path (default: "decor_search_history.json")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, but don't fail if it doesn't exist
        let _ = dotenvy::dotenv();

        let debounce_ms = Self::parse_env_u64("DECOR_DEBOUNCE_MS", 300)?;
        if debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::InvalidValue {
                var: "DECOR_DEBOUNCE_MS".to_string(),
                reason: format!("Must be at most {}", MAX_DEBOUNCE_MS),
            });
        }

        let max_suggestions = Self::parse_env_usize("DECOR_MAX_SUGGESTIONS", 5)?;

        let history_capacity = Self::parse_env_usize("DECOR_HISTORY_CAPACITY", 10)?;
        if history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ConfigError::InvalidValue {
                var: "DECOR_HISTORY_CAPACITY".to_string(),
                reason: format!("Must be at most {}", MAX_HISTORY_CAPACITY),
            });
        }

        let history_path = env::var("DECOR_HISTORY_PATH")
            .unwrap_or_else(|_| "decor_search_history.json".to_string());
        if history_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "DECOR_HISTORY_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            debounce_ms,
            max_suggestions,
            history_capacity,
            history_path,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debounce_ms: 300,
            max_suggestions: 5,
            history_capacity: 10,
            history_path: "decor_search_history.json".to_string(),
        }
    }
}
