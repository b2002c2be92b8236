//! JSON record file
//!
//! Layout: `{ "version": N, "persons": [...], "appointments": [...] }`. Field values
//! are revalidated while deserializing and cross-record rules (unique NRICs,
//! appointments referring to a checked-in patient) when the book is rebuilt.

use crate::core::version::data_format_version;
use crate::model::appointment::Appointment;
use crate::model::person::Person;
use crate::model::record_book::RecordBook;
use crate::storage::{RecordBookStorage, StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct StoredRecordBookRef<'a> {
    version: u32,
    persons: &'a [Person],
    appointments: &'a [Appointment],
}

#[derive(Deserialize)]
struct StoredRecordBook {
    version: u32,
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    appointments: Vec<Appointment>,
}

/// `<data_dir>/Hms/hms.json`, when the platform has a data directory
pub fn default_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("Hms").join("hms.json"))
}

#[derive(Debug, Clone)]
pub struct JsonRecordBookStorage {
    path: PathBuf,
}

impl JsonRecordBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn format_error(&self, source: serde_json::Error) -> StorageError {
        StorageError::Format {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordBookStorage for JsonRecordBookStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StorageResult<Option<RecordBook>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No record file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let stored: StoredRecordBook =
            serde_json::from_str(&contents).map_err(|e| self.format_error(e))?;
        let supported = data_format_version();
        if stored.version > supported {
            return Err(StorageError::UnsupportedVersion {
                path: self.path.clone(),
                found: stored.version,
                supported,
            });
        }

        let book = RecordBook::from_parts(stored.persons, stored.appointments).map_err(
            |source| StorageError::IllegalValue {
                path: self.path.clone(),
                source,
            },
        )?;
        log::debug!(
            "Loaded {} persons and {} appointments from {}",
            book.persons().len(),
            book.appointments().len(),
            self.path.display()
        );
        Ok(Some(book))
    }

    fn save(&self, book: &RecordBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let stored = StoredRecordBookRef {
            version: data_format_version(),
            persons: book.persons(),
            appointments: book.appointments(),
        };
        let json = serde_json::to_string_pretty(&stored).map_err(|e| self.format_error(e))?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        log::debug!("Saved record book to {}", self.path.display());
        Ok(())
    }
}
