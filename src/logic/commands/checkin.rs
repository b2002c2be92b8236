use crate::logic::commands::CommandResult;
use crate::logic::error::CommandOutcome;
use crate::model::person::Person;
use crate::model::Model;

pub const COMMAND_WORD: &str = "checkin";

pub const MESSAGE_USAGE: &str = "checkin: Checks in a patient to the HMS. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS nr/NRIC [t/TAG]...\n\
Example: checkin n/John Doe p/98765432 e/johnd@example.com \
a/311, Clementi Ave 2, #02-25 nr/S1234567A t/diabetic t/elderly";

/// Adds a new patient to the record book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinCommand {
    to_add: Person,
}

impl CheckinCommand {
    pub fn new(to_add: Person) -> Self {
        Self { to_add }
    }

    pub fn person(&self) -> &Person {
        &self.to_add
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        model.add_person(self.to_add.clone())?;
        model.commit();
        log::info!("Checked in patient {}", self.to_add.nric());
        Ok(CommandResult::new(format!(
            "New person checked in: {}",
            self.to_add
        )))
    }
}
