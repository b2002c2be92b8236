use crate::logic::commands::edit::{EditCommand, MESSAGE_USAGE};
use crate::logic::error::{ParseError, ParseResult};
use crate::logic::parser::util::{parse_index, parse_optional_field, parse_tags};
use crate::logic::syntax::*;
use crate::logic::tokenizer::tokenize;
use crate::model::fields::{Address, Email, Name, Nric, Phone};
use crate::model::person::PersonChanges;

pub fn parse(args: &str) -> ParseResult<EditCommand> {
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
    if arguments.preamble().is_empty() {
        return Err(ParseError::invalid_format(MESSAGE_USAGE));
    }
    let index = parse_index(arguments.preamble())?;

    let tag_values = arguments.all_values(&PREFIX_TAG);
    // A lone empty `t/` clears the tags
    let tags = match tag_values {
        [] => None,
        [only] if only.is_empty() => Some(Default::default()),
        values => Some(parse_tags(values)?),
    };

    let changes = PersonChanges {
        name: parse_optional_field(&arguments, &PREFIX_NAME, Name::new)?,
        phone: parse_optional_field(&arguments, &PREFIX_PHONE, Phone::new)?,
        email: parse_optional_field(&arguments, &PREFIX_EMAIL, Email::new)?,
        address: parse_optional_field(&arguments, &PREFIX_ADDRESS, Address::new)?,
        nric: parse_optional_field(&arguments, &PREFIX_NRIC, Nric::new)?,
        tags,
    };
    if !changes.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(EditCommand::new(index, changes))
}
