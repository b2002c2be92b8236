use crate::logic::commands::listing::find::MESSAGE_USAGE;
use crate::logic::commands::FindCommand;
use crate::logic::error::{ParseError, ParseResult};

pub fn parse(args: &str) -> ParseResult<FindCommand> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(MESSAGE_USAGE));
    }
    Ok(FindCommand::new(keywords))
}
