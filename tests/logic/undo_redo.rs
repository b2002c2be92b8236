//! Snapshot history driven through commands

use crate::common::*;
use hms::logic::error::CommandError;
use hms::logic::LogicError;
use hms::model::person::PersonFilter;
use hms::model::ModelError;

const MUTATIONS: [&str; 6] = [
    CHECKIN_AMY,
    CHECKIN_BOB,
    ADDAPPT_AMY,
    "edit 2 p/99999999 t/",
    "delete 1",
    "clear",
];

#[test]
fn test_undo_is_a_left_inverse() {
    for count in 1..=MUTATIONS.len() {
        let mut hms = Harness::new();
        hms.ok(CHECKIN_CARL);
        let before = hms.book();

        for command in &MUTATIONS[..count] {
            hms.ok(command);
        }
        for _ in 0..count {
            assert_eq!(hms.ok("undo").feedback, "Undo success!");
        }
        assert_eq!(hms.book(), before, "after {} mutations", count);
    }
}

#[test]
fn test_redo_restores_pre_undo_state() {
    let mut hms = Harness::new();
    for command in &MUTATIONS[..4] {
        hms.ok(command);
    }
    let latest = hms.book();

    hms.ok("undo");
    hms.ok("undo");
    assert_ne!(hms.book(), latest);
    hms.ok("redo");
    hms.ok("redo");
    assert_eq!(hms.book(), latest);
    assert_eq!(
        hms.run("redo").unwrap_err(),
        LogicError::Command(CommandError::Model(ModelError::NoUndoneState))
    );
}

#[test]
fn test_new_mutation_discards_redo_branch() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    hms.ok(CHECKIN_BOB);
    hms.ok("undo");
    assert!(hms.logic.model().can_redo());

    hms.ok(CHECKIN_CARL);
    assert!(!hms.logic.model().can_redo());
    assert_eq!(
        hms.run("redo").unwrap_err().to_string(),
        "No more commands to redo!"
    );
    let names: Vec<String> = hms
        .book()
        .persons()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, ["Amy Bee", "Carl Kurz"]);
}

#[test]
fn test_failed_and_read_only_commands_leave_history_alone() {
    let mut hms = Harness::new();
    assert!(hms.run("undo").is_err());
    hms.ok("list");
    hms.ok("find amy");
    hms.ok("history");
    assert!(hms.run(CHECKIN_AMY.replace("p/85355255", "p/abc").as_str()).is_err());
    assert_eq!(
        hms.run("undo").unwrap_err(),
        LogicError::Command(CommandError::Model(ModelError::NoPreviousState))
    );
}

#[test]
fn test_undo_resets_filter() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    hms.ok(CHECKIN_BOB);
    hms.ok("find bob");
    assert_eq!(hms.logic.filtered_persons().len(), 1);

    hms.ok("undo");
    assert_eq!(hms.logic.model().filter(), &PersonFilter::All);
    assert_eq!(hms.logic.filtered_persons().len(), 1);
    assert_eq!(hms.logic.filtered_persons()[0].name().as_str(), "Amy Bee");
}

#[test]
fn test_history_limit_bounds_undo_steps() {
    let mut hms = Harness::with_history_limit(Some(2));
    hms.ok(CHECKIN_AMY);
    hms.ok(CHECKIN_BOB);
    hms.ok(CHECKIN_CARL);

    hms.ok("undo");
    hms.ok("undo");
    assert!(hms.run("undo").is_err());
    assert_eq!(hms.book().persons().len(), 1);
}
