//! Shared fixtures for the integration tests

#![allow(dead_code)]

use hms::logic::commands::CommandResult;
use hms::logic::{LogicError, LogicManager};
use hms::model::record_book::RecordBook;
use hms::model::Model;
use hms::storage::{JsonRecordBookStorage, RecordBookStorage};
use std::path::PathBuf;
use tempfile::TempDir;

pub const CHECKIN_AMY: &str = "checkin n/Amy Bee p/85355255 e/amy@gmail.com \
a/123, Jurong West Ave 6, #08-111 nr/S1234567A";

pub const CHECKIN_BOB: &str = "checkin n/Bob Choo p/22222222 e/bob@example.com \
a/Block 123, Bobby Street 3 nr/S7654321B t/husband t/friend";

pub const CHECKIN_CARL: &str = "checkin n/Carl Kurz p/95352563 e/heinz@example.com \
a/wall street nr/T0123456C";

pub const ADDAPPT_AMY: &str =
    "addappt nr/S1234567A ty/SURG pr/Heart Bypass dt/27-04-2025 10:30 dr/Dr Tan";

/// A logic manager saving into a fresh temporary directory
pub struct Harness {
    pub dir: TempDir,
    pub logic: LogicManager,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_history_limit(None)
    }

    pub fn with_history_limit(limit: Option<usize>) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let storage = JsonRecordBookStorage::new(dir.path().join("hms.json"));
        let logic = LogicManager::new(Model::new(RecordBook::new(), limit), Box::new(storage));
        Self { dir, logic }
    }

    pub fn data_path(&self) -> PathBuf {
        self.dir.path().join("hms.json")
    }

    pub fn run(&mut self, command: &str) -> Result<CommandResult, LogicError> {
        self.logic.execute(command)
    }

    /// Run a command that is expected to succeed
    pub fn ok(&mut self, command: &str) -> CommandResult {
        self.logic
            .execute(command)
            .unwrap_or_else(|e| panic!("'{}' failed: {}", command, e))
    }

    pub fn book(&self) -> RecordBook {
        self.logic.record_book().clone()
    }

    /// What a fresh storage reads back from the data file
    pub fn saved_book(&self) -> Option<RecordBook> {
        JsonRecordBookStorage::new(self.data_path())
            .read()
            .expect("saved file should load")
    }
}
