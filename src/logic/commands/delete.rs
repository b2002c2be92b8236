use crate::logic::commands::CommandResult;
use crate::logic::error::{CommandError, CommandOutcome};
use crate::logic::index::Index;
use crate::model::Model;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the person identified by the index \
number used in the displayed person list, together with their appointments.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        let target = model
            .filtered_persons()
            .get(self.index.zero_based())
            .map(|p| (*p).clone())
            .ok_or(CommandError::InvalidPersonIndex)?;

        model.delete_person(&target)?;
        model.commit();
        log::info!("Deleted patient {}", target.nric());
        Ok(CommandResult::new(format!("Deleted Person: {}", target)))
    }
}
