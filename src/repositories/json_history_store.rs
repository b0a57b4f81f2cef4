//! JSON-file-backed query history store.

use crate::config::Config;
use crate::error::HistoryResult;
use crate::repositories::traits::QueryHistoryStore;
use std::fs;
use std::path::PathBuf;

/// Persists the recent-query list as a JSON string array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the configured history path.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.history_path)
    }

    /// The backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl QueryHistoryStore for JsonFileHistoryStore {
    fn load(&self) -> HistoryResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, entries: &[String]) -> HistoryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
