//! Storage-specific error types for JSON file operations.
//!
//! These errors are internal to the storage layer and are converted to
//! `moneymark_core::Error` before being returned to callers.

use std::path::PathBuf;

use moneymark_core::errors::{Error, StorageError as CoreStorageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        let core = match err {
            StorageError::ReadFailed { path, source } => {
                CoreStorageError::ReadFailed(format!("{}: {}", path.display(), source))
            }
            StorageError::WriteFailed { path, source } => {
                CoreStorageError::WriteFailed(format!("{}: {}", path.display(), source))
            }
            StorageError::Malformed { path, source } => {
                CoreStorageError::Malformed(format!("{}: {}", path.display(), source))
            }
            StorageError::Serialization(e) => CoreStorageError::Internal(e.to_string()),
            StorageError::LockPoisoned(path) => {
                CoreStorageError::Internal(format!("Document lock poisoned: {}", path))
            }
        };
        Error::Storage(core)
    }
}
