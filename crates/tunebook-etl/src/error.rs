//! Error types for the ingestion driver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while ingesting ABC books.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A source file could not be read. Skippable: the batch continues
    /// with the next file.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The record store rejected an operation. Fatal: nothing can be
    /// durably stored without it.
    #[error("storage error: {0}")]
    Storage(#[from] tunebook_core::Error),
}

impl IngestError {
    /// Returns `true` when the error must abort the whole ingestion run
    /// rather than just the current file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Convenience alias for ingestion results.
pub type IngestResult<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_errors_are_skippable() {
        let err = IngestError::Read {
            path: PathBuf::from("/books/1/bad.abc"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_storage_errors_are_fatal() {
        let err = IngestError::Storage(tunebook_core::Error::InvalidData(
            "corrupt row".to_string(),
        ));
        assert!(err.is_fatal());
    }
}
