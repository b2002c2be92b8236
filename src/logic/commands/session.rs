//! Commands about the session itself rather than the records

use crate::logic::commands::CommandResult;
use crate::logic::history::CommandHistory;

pub mod history {
    pub const COMMAND_WORD: &str = "history";

    pub const MESSAGE_USAGE: &str = "history: Lists all the commands that you have entered \
in reverse chronological order.";
}

pub mod help {
    pub const COMMAND_WORD: &str = "help";

    pub const MESSAGE_USAGE: &str = "help: Shows program usage instructions.";
}

pub mod exit {
    pub const COMMAND_WORD: &str = "exit";

    pub const MESSAGE_USAGE: &str = "exit: Saves and exits the HMS.";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub fn execute(&self, history: &CommandHistory) -> CommandResult {
        if history.is_empty() {
            return CommandResult::new("You have not yet entered any commands.");
        }
        let entries: Vec<&str> = history.entries().iter().rev().map(String::as_str).collect();
        CommandResult::new(format!(
            "Entered commands (from most recent to earliest):\n{}",
            entries.join("\n")
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn execute(&self) -> CommandResult {
        CommandResult {
            show_help: true,
            ..CommandResult::new("Showing help.")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn execute(&self) -> CommandResult {
        CommandResult {
            exit: true,
            ..CommandResult::new("Exiting HMS as requested ...")
        }
    }
}
