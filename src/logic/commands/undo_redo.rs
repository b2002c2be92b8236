//! Walking the snapshot history

use crate::logic::commands::CommandResult;
use crate::logic::error::CommandOutcome;
use crate::model::Model;

pub mod undo {
    pub const COMMAND_WORD: &str = "undo";

    pub const MESSAGE_USAGE: &str = "undo: Restores the HMS to the state before the \
previous undoable command.";
}

pub mod redo {
    pub const COMMAND_WORD: &str = "redo";

    pub const MESSAGE_USAGE: &str = "redo: Reverses the most recent undo.";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoCommand;

impl UndoCommand {
    pub fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        model.undo()?;
        log::debug!("Undo applied");
        Ok(CommandResult::new("Undo success!").with_list())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedoCommand;

impl RedoCommand {
    pub fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        model.redo()?;
        log::debug!("Redo applied");
        Ok(CommandResult::new("Redo success!").with_list())
    }
}
