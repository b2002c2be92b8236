//! Booking appointments against checked-in patients

use crate::common::*;
use hms::logic::commands::add_appointment::MESSAGE_USAGE as ADDAPPT_USAGE;
use hms::logic::error::{CommandError, ParseError};
use hms::logic::LogicError;
use hms::model::appointment::AppointmentType;
use hms::model::fields::{FieldKind, Nric};
use hms::model::ModelError;

#[test]
fn test_addappt_for_checked_in_patient() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    let result = hms.ok(ADDAPPT_AMY);
    assert_eq!(
        result.feedback,
        "New appointment added: Surgery (SURG) Procedure: Heart Bypass \
Date & Time: 27-04-2025 10:30 Doctor: Dr Tan NRIC: S1234567A"
    );

    let book = hms.book();
    let booked: Vec<_> = book
        .appointments_for(&Nric::new("S1234567A").unwrap())
        .collect();
    assert_eq!(booked.len(), 1);
    assert_eq!(booked[0].appointment_type(), AppointmentType::Surgery);
}

#[test]
fn test_addappt_unknown_patient() {
    let mut hms = Harness::new();
    let err = hms.run(ADDAPPT_AMY).unwrap_err();
    assert_eq!(
        err,
        LogicError::Command(CommandError::Model(ModelError::PersonNotFound {
            nric: Nric::new("S1234567A").unwrap()
        }))
    );
    assert_eq!(err.to_string(), "No patient with NRIC S1234567A is checked in");
    assert!(hms.book().appointments().is_empty());
}

#[test]
fn test_addappt_unknown_type_is_an_error() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    let err = hms
        .run("addappt nr/S1234567A ty/Surg pr/Heart Bypass dt/27-04-2025 10:30 dr/Dr Tan")
        .unwrap_err();
    match err {
        LogicError::Parse(ParseError::FieldConstraint(e)) => {
            assert_eq!(e.field, FieldKind::AppointmentType);
            assert!(e.message.contains("SURG"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_addappt_missing_and_bad_fields() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    assert_eq!(
        hms.run("addappt nr/S1234567A ty/SURG dt/27-04-2025 10:30 dr/Dr Tan")
            .unwrap_err(),
        LogicError::Parse(ParseError::invalid_format(ADDAPPT_USAGE))
    );
    assert!(matches!(
        hms.run("addappt nr/S1234567A ty/SURG pr/Bypass dt/2025-04-27 10:30 dr/Dr Tan"),
        Err(LogicError::Parse(ParseError::FieldConstraint(e))) if e.field == FieldKind::DateTime
    ));
    assert!(matches!(
        hms.run("addappt nr/S1234567A ty/SURG pr/Bypass dt/27-04-2025 10:30 dr/Dr. Tan"),
        Err(LogicError::Parse(ParseError::FieldConstraint(e))) if e.field == FieldKind::Doctor
    ));
}

#[test]
fn test_duplicate_appointment() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    hms.ok(ADDAPPT_AMY);
    assert_eq!(
        hms.run(ADDAPPT_AMY).unwrap_err(),
        LogicError::Command(CommandError::Model(ModelError::DuplicateAppointment))
    );
    hms.ok("addappt nr/S1234567A ty/SURG pr/Heart Bypass dt/28-04-2025 10:30 dr/Dr Tan");
    assert_eq!(hms.book().appointments().len(), 2);
}

#[test]
fn test_appointments_follow_patient_edits_and_deletion() {
    let mut hms = Harness::new();
    hms.ok(CHECKIN_AMY);
    hms.ok(CHECKIN_BOB);
    hms.ok(ADDAPPT_AMY);

    hms.ok("edit 1 nr/S1111111Z");
    let book = hms.book();
    assert_eq!(book.appointments()[0].nric().as_str(), "S1111111Z");

    hms.ok("delete 1");
    let book = hms.book();
    assert!(book.appointments().is_empty());
    assert_eq!(book.persons().len(), 1);
}
