use crate::logic::commands::checkin::{CheckinCommand, MESSAGE_USAGE};
use crate::logic::error::ParseResult;
use crate::logic::parser::util::{parse_field, parse_tags, require_prefixes};
use crate::logic::syntax::*;
use crate::logic::tokenizer::tokenize;
use crate::model::fields::{Address, Email, Name, Nric, Phone};
use crate::model::person::Person;

pub fn parse(args: &str) -> ParseResult<CheckinCommand> {
    let arguments = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_NRIC,
            PREFIX_TAG,
        ],
    );
    require_prefixes(
        &arguments,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_NRIC,
        ],
        MESSAGE_USAGE,
    )?;

    let person = Person::new(
        parse_field(&arguments, &PREFIX_NAME, Name::new)?,
        parse_field(&arguments, &PREFIX_PHONE, Phone::new)?,
        parse_field(&arguments, &PREFIX_EMAIL, Email::new)?,
        parse_field(&arguments, &PREFIX_ADDRESS, Address::new)?,
        parse_field(&arguments, &PREFIX_NRIC, Nric::new)?,
        parse_tags(arguments.all_values(&PREFIX_TAG))?,
    );
    Ok(CheckinCommand::new(person))
}
