//! Session configuration.
//!
//! Environment variables:
//! - `PROCSCHED_RECORDS`: record file path (default: `processes.txt`)
//! - `PROCSCHED_REPORT`: schedule report path (default: `priority_output.txt`)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default record file, read at start-up and written by save.
pub const DEFAULT_RECORDS_PATH: &str = "processes.txt";
/// Default report file, written by every schedule run.
pub const DEFAULT_REPORT_PATH: &str = "priority_output.txt";

/// Environment variable overriding the record file path.
pub const RECORDS_ENV: &str = "PROCSCHED_RECORDS";
/// Environment variable overriding the report file path.
pub const REPORT_ENV: &str = "PROCSCHED_REPORT";

/// File locations used by a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Persisted record list.
    pub records_path: PathBuf,
    /// Schedule report destination.
    pub report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `PROCSCHED_RECORDS` / `PROCSCHED_REPORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(RECORDS_ENV).filter(|v| !v.is_empty()) {
            config.records_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(REPORT_ENV).filter(|v| !v.is_empty()) {
            config.report_path = PathBuf::from(path);
        }
        config
    }

    /// Sets the record file path.
    pub fn with_records_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.records_path = path.into();
        self
    }

    /// Sets the report file path.
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Record file path.
    pub fn records_path(&self) -> &Path {
        &self.records_path
    }

    /// Report file path.
    pub fn report_path(&self) -> &Path {
        &self.report_path
    }
}
