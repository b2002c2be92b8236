//! Persistence of the record book
//!
//! The logic layer only sees the [`RecordBookStorage`] trait; the JSON file
//! implementation lives in [`json`].

pub mod json;

pub use json::JsonRecordBookStorage;

use crate::core::error_handling::ContextualError;
use crate::model::record_book::RecordBook;
use crate::model::ModelError;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Could not access record file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Record file {path} is not valid: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record file {path} holds inconsistent records: {source}")]
    IllegalValue {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    #[error("Record file {path} has format version {found}, newest supported is {supported}")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },
}

impl ContextualError for StorageError {
    fn is_user_actionable(&self) -> bool {
        // Everything except raw I/O failures points at the file contents
        !matches!(self, StorageError::Io { .. })
    }

    fn user_message(&self) -> Option<String> {
        if self.is_user_actionable() {
            Some(self.to_string())
        } else {
            None
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

pub trait RecordBookStorage {
    /// Location the records are read from and written to
    fn path(&self) -> &Path;

    /// Load the record book; `Ok(None)` when nothing has been saved yet
    fn read(&self) -> StorageResult<Option<RecordBook>>;

    fn save(&self, book: &RecordBook) -> StorageResult<()>;
}
