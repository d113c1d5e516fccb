//! Error types for record store, scheduling and report operations.
//!
//! No variant is fatal to an interactive session: callers report the
//! error and carry on with the store unchanged.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by core operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Edit or remove referenced an id with no record.
    #[error("Not found: no process with id {id}")]
    NotFound { id: i32 },

    /// A record or report file could not be opened.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read or write failed after the file was opened.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input rejected before it reached the store.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl Error {
    /// Create a not-found error
    #[inline]
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    /// Create an open failure for `path`
    #[inline]
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid record error
    #[inline]
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    /// Whether this is the "record not found" outcome of edit/remove.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let e = Error::not_found(42);
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "Not found: no process with id 42");
    }

    #[test]
    fn test_open_display_includes_path() {
        let e = Error::open(
            "missing/processes.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(!e.is_not_found());
        let msg = e.to_string();
        assert!(msg.starts_with("Cannot open missing/processes.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_io_from() {
        let e: Error = io::Error::new(io::ErrorKind::WriteZero, "disk full").into();
        assert!(matches!(e, Error::Io(_)));
    }
}
