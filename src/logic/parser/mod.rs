//! Command line parsing
//!
//! The first whitespace-delimited word selects a command; the rest of the line is
//! handed to that command's parser. Commands without arguments ignore anything
//! after the keyword.

mod add_appointment;
mod checkin;
mod delete;
mod edit;
mod find;
pub mod util;

use crate::logic::commands::{
    self, ClearCommand, Command, ExitCommand, HelpCommand, HistoryCommand, ListCommand,
    RedoCommand, UndoCommand,
};
use crate::logic::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

static BASIC_COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*(?P<word>\S+)(?P<arguments>.*)$").expect("valid command format pattern")
});

/// Parses user input into a [`Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HmsParser;

impl HmsParser {
    pub fn parse_command(&self, input: &str) -> ParseResult<Command> {
        let captures = BASIC_COMMAND_FORMAT
            .captures(input)
            .ok_or_else(|| ParseError::invalid_format(commands::session::help::MESSAGE_USAGE))?;
        let word = &captures["word"];
        let arguments = &captures["arguments"];
        log::trace!("parsing '{}' with arguments '{}'", word, arguments);

        let command = match word {
            commands::checkin::COMMAND_WORD => Command::Checkin(checkin::parse(arguments)?),
            commands::add_appointment::COMMAND_WORD => {
                Command::AddAppointment(add_appointment::parse(arguments)?)
            }
            commands::edit::COMMAND_WORD => Command::Edit(edit::parse(arguments)?),
            commands::delete::COMMAND_WORD => Command::Delete(delete::parse(arguments)?),
            commands::listing::find::COMMAND_WORD => Command::Find(find::parse(arguments)?),
            commands::listing::list::COMMAND_WORD => Command::List(ListCommand),
            commands::clear::COMMAND_WORD => Command::Clear(ClearCommand),
            commands::session::history::COMMAND_WORD => Command::History(HistoryCommand),
            commands::undo_redo::undo::COMMAND_WORD => Command::Undo(UndoCommand),
            commands::undo_redo::redo::COMMAND_WORD => Command::Redo(RedoCommand),
            commands::session::help::COMMAND_WORD => Command::Help(HelpCommand),
            commands::session::exit::COMMAND_WORD => Command::Exit(ExitCommand),
            _ => return Err(ParseError::UnknownCommand),
        };
        Ok(command)
    }
}
