//! Entry point from the front end into parsing, execution and persistence

use crate::logic::commands::CommandResult;
use crate::logic::error::LogicError;
use crate::logic::history::CommandHistory;
use crate::logic::parser::HmsParser;
use crate::model::person::Person;
use crate::model::record_book::RecordBook;
use crate::model::Model;
use crate::storage::RecordBookStorage;

pub struct LogicManager {
    model: Model,
    storage: Box<dyn RecordBookStorage>,
    parser: HmsParser,
    history: CommandHistory,
}

impl LogicManager {
    pub fn new(model: Model, storage: Box<dyn RecordBookStorage>) -> Self {
        Self {
            model,
            storage,
            parser: HmsParser,
            history: CommandHistory::new(),
        }
    }

    /// Parse and run one command line
    ///
    /// The line is recorded in the command history whether or not it succeeds. After a
    /// successful command that changed the records, the book is saved; a failed save is
    /// logged and does not affect the command's result.
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        log::info!("[USER COMMAND] {}", command_text);
        let outcome = self.parse_and_execute(command_text);
        self.history.add(command_text);

        match &outcome {
            Ok(result) => log::debug!("Command succeeded: {}", result.feedback),
            Err(e) => log::debug!("Command failed: {}", e),
        }
        outcome
    }

    fn parse_and_execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        let command = self.parser.parse_command(command_text)?;
        log::debug!("Executing {} command", command.word());
        let result = command.execute(&mut self.model, &self.history)?;
        if command.is_mutating() {
            self.save();
        }
        Ok(result)
    }

    fn save(&self) {
        if let Err(e) = self.storage.save(self.model.record_book()) {
            log::error!("Could not save records: {}", e);
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn record_book(&self) -> &RecordBook {
        self.model.record_book()
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.model.filtered_persons()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::error::{CommandError, ParseError};
    use crate::model::ModelError;
    use crate::storage::{StorageError, StorageResult};
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    /// Records each saved book in memory, or fails every save
    struct RecordingStorage {
        path: PathBuf,
        saved: Rc<RefCell<Vec<RecordBook>>>,
        fail: bool,
    }

    impl RecordBookStorage for RecordingStorage {
        fn path(&self) -> &Path {
            &self.path
        }

        fn read(&self) -> StorageResult<Option<RecordBook>> {
            Ok(None)
        }

        fn save(&self, book: &RecordBook) -> StorageResult<()> {
            if self.fail {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                });
            }
            self.saved.borrow_mut().push(book.clone());
            Ok(())
        }
    }

    fn manager(fail: bool) -> (LogicManager, Rc<RefCell<Vec<RecordBook>>>) {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let storage = RecordingStorage {
            path: PathBuf::from("memory.json"),
            saved: Rc::clone(&saved),
            fail,
        };
        (LogicManager::new(Model::default(), Box::new(storage)), saved)
    }

    const CHECKIN_AMY: &str =
        "checkin n/Amy Bee p/85355255 e/amy@gmail.com a/123, Jurong West Ave 6, #08-111 nr/S1234567A";

    #[test]
    fn test_mutations_are_saved() {
        let (mut logic, saved) = manager(false);
        logic.execute(CHECKIN_AMY).unwrap();
        logic.execute("list").unwrap();
        logic.execute("undo").unwrap();

        let saved = saved.borrow();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].persons().len(), 1);
        assert!(saved[1].is_empty());
    }

    #[test]
    fn test_failures_are_not_saved_but_are_recorded() {
        let (mut logic, saved) = manager(false);
        assert_eq!(
            logic.execute("delete 1").unwrap_err(),
            LogicError::Command(CommandError::InvalidPersonIndex)
        );
        assert_eq!(
            logic.execute("frobnicate").unwrap_err(),
            LogicError::Parse(ParseError::UnknownCommand)
        );
        assert!(saved.borrow().is_empty());
        assert_eq!(logic.history().entries(), ["delete 1", "frobnicate"]);
    }

    #[test]
    fn test_save_failure_keeps_command_result() {
        let (mut logic, _) = manager(true);
        let result = logic.execute(CHECKIN_AMY).unwrap();
        assert!(result.feedback.starts_with("New person checked in: Amy Bee"));
        assert_eq!(logic.record_book().persons().len(), 1);

        assert_eq!(
            logic.execute(CHECKIN_AMY).unwrap_err(),
            LogicError::Command(CommandError::Model(ModelError::DuplicatePerson))
        );
    }

    #[test]
    fn test_history_excludes_itself() {
        let (mut logic, _) = manager(false);
        logic.execute("list").unwrap();
        let result = logic.execute("history").unwrap();
        assert_eq!(
            result.feedback,
            "Entered commands (from most recent to earliest):\nlist"
        );
    }
}
