use crate::logic::commands::add_appointment::{AddAppointmentCommand, MESSAGE_USAGE};
use crate::logic::error::ParseResult;
use crate::logic::parser::util::{parse_field, require_prefixes};
use crate::logic::syntax::*;
use crate::logic::tokenizer::{tokenize, Prefix};
use crate::model::appointment::{Appointment, AppointmentDateTime, AppointmentType};
use crate::model::fields::{Doctor, Nric, Procedure};

const PREFIXES: [Prefix; 5] = [
    PREFIX_NRIC,
    PREFIX_TYPE,
    PREFIX_PROCEDURE,
    PREFIX_DATE_TIME,
    PREFIX_DOCTOR,
];

pub fn parse(args: &str) -> ParseResult<AddAppointmentCommand> {
    let arguments = tokenize(args, &PREFIXES);
    require_prefixes(&arguments, &PREFIXES, MESSAGE_USAGE)?;

    let appointment = Appointment::new(
        parse_field(&arguments, &PREFIX_TYPE, |v| {
            AppointmentType::from_abbreviation(&v)
        })?,
        parse_field(&arguments, &PREFIX_PROCEDURE, Procedure::new)?,
        parse_field(&arguments, &PREFIX_DATE_TIME, |v| AppointmentDateTime::new(&v))?,
        parse_field(&arguments, &PREFIX_DOCTOR, Doctor::new)?,
        parse_field(&arguments, &PREFIX_NRIC, Nric::new)?,
    );
    Ok(AddAppointmentCommand::new(appointment))
}
