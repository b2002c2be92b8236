use crate::logic::commands::delete::{DeleteCommand, MESSAGE_USAGE};
use crate::logic::error::{ParseError, ParseResult};
use crate::logic::parser::util::parse_index;

pub fn parse(args: &str) -> ParseResult<DeleteCommand> {
    let args = args.trim();
    if args.is_empty() {
        return Err(ParseError::invalid_format(MESSAGE_USAGE));
    }
    Ok(DeleteCommand::new(parse_index(args)?))
}
