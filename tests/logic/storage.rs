//! What reaches the record file

use crate::common::*;
use hms::logic::LogicManager;
use hms::model::Model;
use hms::storage::{JsonRecordBookStorage, RecordBookStorage};

#[test]
fn test_read_only_commands_do_not_write() {
    let mut hms = Harness::new();
    hms.ok("list");
    hms.ok("history");
    hms.ok("help");
    assert!(hms.run("delete 1").is_err());
    assert!(!hms.data_path().exists());
}

#[test]
fn test_every_mutation_is_saved() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    assert_eq!(hms.saved_book(), Some(hms.book()));

    hms.ok(ADDAPPT_AMY);
    assert_eq!(hms.saved_book(), Some(hms.book()));

    hms.ok("undo");
    let saved = hms.saved_book().unwrap();
    assert_eq!(saved.persons().len(), 1);
    assert!(saved.appointments().is_empty());
}

#[test]
fn test_saved_file_starts_next_session() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    hms.ok(CHECKIN_BOB);
    hms.ok(ADDAPPT_AMY);

    let storage = JsonRecordBookStorage::new(hms.data_path());
    let book = storage.read().unwrap().unwrap();
    let mut next = LogicManager::new(Model::new(book, None), Box::new(storage));
    assert_eq!(next.record_book(), &hms.book());

    // the new session has no history to undo into
    assert!(next.execute("undo").is_err());
    assert!(next.execute(CHECKIN_AMY).is_err());
}

#[test]
fn test_failed_save_keeps_command_result() {
    let dir = tempfile::TempDir::new().unwrap();
    // a directory cannot be written as a file
    let storage = JsonRecordBookStorage::new(dir.path());
    let mut logic = LogicManager::new(Model::default(), Box::new(storage));

    let result = logic.execute(CHECKIN_AMY).unwrap();
    assert!(result.feedback.starts_with("New person checked in"));
    assert_eq!(logic.record_book().persons().len(), 1);
    assert!(logic.execute("undo").is_ok());
}
