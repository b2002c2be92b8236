use crate::logic::commands::CommandResult;
use crate::logic::error::{CommandError, CommandOutcome};
use crate::logic::index::Index;
use crate::model::person::{PersonChanges, PersonFilter};
use crate::model::Model;

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the person identified \
by the index number used in the displayed person list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) \
[n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [nr/NRIC] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

/// Replaces fields of the person at a position in the displayed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    changes: PersonChanges,
}

impl EditCommand {
    pub fn new(index: Index, changes: PersonChanges) -> Self {
        Self { index, changes }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn changes(&self) -> &PersonChanges {
        &self.changes
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        let target = model
            .filtered_persons()
            .get(self.index.zero_based())
            .map(|p| (*p).clone())
            .ok_or(CommandError::InvalidPersonIndex)?;
        let edited = self.changes.apply_to(&target);

        model.update_person(&target, edited.clone())?;
        model.update_filter(PersonFilter::All);
        model.commit();
        log::info!("Edited patient {} (now {})", target.nric(), edited.nric());
        Ok(CommandResult::new(format!("Edited Person: {}", edited)))
    }
}
