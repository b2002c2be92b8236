//! Checking in, editing, deleting and finding patients

use crate::common::*;
use hms::logic::commands::checkin::MESSAGE_USAGE as CHECKIN_USAGE;
use hms::logic::error::{CommandError, ParseError};
use hms::logic::LogicError;
use hms::model::fields::FieldKind;
use hms::model::ModelError;

#[test]
fn test_checkin_amy() {
    let mut hms = Harness::new();
    let result = hms.ok(CHECKIN_AMY);

    let persons = hms.book().persons().to_vec();
    assert_eq!(persons.len(), 1);
    let amy = &persons[0];
    assert_eq!(amy.name().as_str(), "Amy Bee");
    assert_eq!(amy.phone().as_str(), "85355255");
    assert_eq!(amy.email().as_str(), "amy@gmail.com");
    assert_eq!(amy.address().as_str(), "123, Jurong West Ave 6, #08-111");
    assert_eq!(amy.nric().as_str(), "S1234567A");
    assert!(amy.tags().is_empty());
    assert_eq!(
        result.feedback,
        "New person checked in: Amy Bee Phone: 85355255 Email: amy@gmail.com \
Address: 123, Jurong West Ave 6, #08-111 NRIC: S1234567A Tags: "
    );
}

#[test]
fn test_checkin_same_command_twice_is_duplicate() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    let err = hms.run(CHECKIN_AMY).unwrap_err();
    assert_eq!(
        err,
        LogicError::Command(CommandError::Model(ModelError::DuplicatePerson))
    );
    assert_eq!(hms.book().persons().len(), 1);
}

#[test]
fn test_checkin_same_nric_other_details_is_duplicate() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    let err = hms
        .run("checkin n/Someone Else p/999 e/x@y.com a/Elsewhere nr/S1234567A t/vip")
        .unwrap_err();
    assert_eq!(err.to_string(), "This person already exists in the HMS");
    assert_eq!(hms.book().persons().len(), 1);
}

#[test]
fn test_checkin_non_numeric_phone() {
    let mut hms = Harness::new();
    let err = hms
        .run("checkin n/Amy p/abc e/amy@gmail.com a/X nr/S1234567A")
        .unwrap_err();
    match err {
        LogicError::Parse(ParseError::FieldConstraint(e)) => {
            assert_eq!(e.field, FieldKind::Phone);
            assert!(e.message.starts_with("Phone numbers"));
        }
        other => panic!("expected a phone constraint error, got {:?}", other),
    }
    assert!(hms.book().persons().is_empty());
}

#[test]
fn test_checkin_each_missing_prefix_is_invalid_format() {
    let complete = [
        "n/Amy Bee",
        "p/85355255",
        "e/amy@gmail.com",
        "a/Jurong",
        "nr/S1234567A",
    ];
    let mut hms = Harness::new();
    for skipped in 0..complete.len() {
        let fields: Vec<&str> = complete
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skipped)
            .map(|(_, f)| *f)
            .collect();
        let command = format!("checkin {}", fields.join(" "));
        assert_eq!(
            hms.run(&command).unwrap_err(),
            LogicError::Parse(ParseError::invalid_format(CHECKIN_USAGE)),
            "{}",
            command
        );
    }
    assert!(hms.book().persons().is_empty());
    assert!(!hms.logic.model().can_undo());
}

#[test]
fn test_invalid_values_for_each_field() {
    let mut hms = Harness::new();
    let cases = [
        ("checkin n/James& p/911 e/a@b.com a/X nr/S1234567A", FieldKind::Name),
        ("checkin n/Amy p/911 e/bob!yahoo a/X nr/S1234567A", FieldKind::Email),
        ("checkin n/Amy p/911 e/a@b.com a/ nr/S1234567A", FieldKind::Address),
        ("checkin n/Amy p/911 e/a@b.com a/X nr/S123A", FieldKind::Nric),
        ("checkin n/Amy p/911 e/a@b.com a/X nr/S1234567A t/*&", FieldKind::Tag),
    ];
    for (command, field) in cases {
        match hms.run(command) {
            Err(LogicError::Parse(ParseError::FieldConstraint(e))) => {
                assert_eq!(e.field, field, "{}", command)
            }
            other => panic!("{} gave {:?}", command, other),
        }
    }
}

#[test]
fn test_edit_and_clear_tags() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_BOB);
    assert_eq!(hms.book().persons()[0].tags().len(), 2);

    let result = hms.ok("edit 1 n/Bob Choo Jr t/");
    let bob = hms.book().persons()[0].clone();
    assert_eq!(bob.name().as_str(), "Bob Choo Jr");
    assert!(bob.tags().is_empty());
    assert_eq!(result.feedback, format!("Edited Person: {}", bob));

    assert_eq!(
        hms.run("edit 1").unwrap_err(),
        LogicError::Parse(ParseError::NoFieldEdited)
    );
    assert_eq!(
        hms.run("edit 2 p/123").unwrap_err(),
        LogicError::Command(CommandError::InvalidPersonIndex)
    );
}

#[test]
fn test_find_then_delete_uses_displayed_index() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    hms.ok(CHECKIN_BOB);
    hms.ok(CHECKIN_CARL);

    let result = hms.ok("find carl");
    assert_eq!(result.feedback, "1 persons listed!");
    assert!(result.show_list);

    hms.ok("delete 1");
    let names: Vec<String> = hms
        .book()
        .persons()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, ["Amy Bee", "Bob Choo"]);
}

#[test]
fn test_unknown_and_blank_commands() {
    let mut hms = Harness::new();
    assert_eq!(
        hms.run("admit n/Amy").unwrap_err(),
        LogicError::Parse(ParseError::UnknownCommand)
    );
    assert!(matches!(
        hms.run("   ").unwrap_err(),
        LogicError::Parse(ParseError::InvalidFormat { .. })
    ));
}
