//! Executable commands
//!
//! Each command is a small immutable struct produced by the parser. Commands that
//! change the record book commit exactly one snapshot on success and leave the model
//! untouched on failure.

pub mod add_appointment;
pub mod checkin;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod listing;
pub mod session;
pub mod undo_redo;

pub use add_appointment::AddAppointmentCommand;
pub use checkin::CheckinCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use listing::{FindCommand, ListCommand};
pub use session::{ExitCommand, HelpCommand, HistoryCommand};
pub use undo_redo::{RedoCommand, UndoCommand};

use crate::logic::error::CommandOutcome;
use crate::logic::history::CommandHistory;
use crate::model::Model;

/// What the front end should do after a command ran
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
    pub show_list: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Default::default()
        }
    }

    pub fn with_list(mut self) -> Self {
        self.show_list = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Checkin(CheckinCommand),
    AddAppointment(AddAppointmentCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List(ListCommand),
    Clear(ClearCommand),
    History(HistoryCommand),
    Undo(UndoCommand),
    Redo(RedoCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn execute(
        &self,
        model: &mut Model,
        history: &CommandHistory,
    ) -> CommandOutcome<CommandResult> {
        match self {
            Command::Checkin(c) => c.execute(model),
            Command::AddAppointment(c) => c.execute(model),
            Command::Edit(c) => c.execute(model),
            Command::Delete(c) => c.execute(model),
            Command::Find(c) => Ok(c.execute(model)),
            Command::List(c) => Ok(c.execute(model)),
            Command::Clear(c) => Ok(c.execute(model)),
            Command::History(c) => Ok(c.execute(history)),
            Command::Undo(c) => c.execute(model),
            Command::Redo(c) => c.execute(model),
            Command::Help(c) => Ok(c.execute()),
            Command::Exit(c) => Ok(c.execute()),
        }
    }

    /// Whether a successful run changes the record book and should be persisted
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Checkin(_)
                | Command::AddAppointment(_)
                | Command::Edit(_)
                | Command::Delete(_)
                | Command::Clear(_)
                | Command::Undo(_)
                | Command::Redo(_)
        )
    }

    pub fn word(&self) -> &'static str {
        match self {
            Command::Checkin(_) => checkin::COMMAND_WORD,
            Command::AddAppointment(_) => add_appointment::COMMAND_WORD,
            Command::Edit(_) => edit::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::Find(_) => listing::find::COMMAND_WORD,
            Command::List(_) => listing::list::COMMAND_WORD,
            Command::Clear(_) => clear::COMMAND_WORD,
            Command::History(_) => session::history::COMMAND_WORD,
            Command::Undo(_) => undo_redo::undo::COMMAND_WORD,
            Command::Redo(_) => undo_redo::redo::COMMAND_WORD,
            Command::Help(_) => session::help::COMMAND_WORD,
            Command::Exit(_) => session::exit::COMMAND_WORD,
        }
    }
}

/// Usage lines for every command, in the order `help` prints them
pub const ALL_USAGES: [&str; 12] = [
    checkin::MESSAGE_USAGE,
    add_appointment::MESSAGE_USAGE,
    edit::MESSAGE_USAGE,
    delete::MESSAGE_USAGE,
    listing::find::MESSAGE_USAGE,
    listing::list::MESSAGE_USAGE,
    clear::MESSAGE_USAGE,
    session::history::MESSAGE_USAGE,
    undo_redo::undo::MESSAGE_USAGE,
    undo_redo::redo::MESSAGE_USAGE,
    session::help::MESSAGE_USAGE,
    session::exit::MESSAGE_USAGE,
];

pub fn help_text() -> String {
    ALL_USAGES.join("\n\n")
}
