use crate::logic::commands::CommandResult;
use crate::logic::error::CommandOutcome;
use crate::model::appointment::Appointment;
use crate::model::Model;

pub const COMMAND_WORD: &str = "addappt";

pub const MESSAGE_USAGE: &str = "addappt: Adds an appointment for a checked-in patient. \
Parameters: nr/NRIC ty/TYPE pr/PROCEDURE dt/DATE_TIME dr/DOCTOR\n\
Example: addappt nr/S1234567A ty/SURG pr/Heart Bypass dt/27-04-2025 10:30 dr/Dr Tan";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAppointmentCommand {
    to_add: Appointment,
}

impl AddAppointmentCommand {
    pub fn new(to_add: Appointment) -> Self {
        Self { to_add }
    }

    pub fn appointment(&self) -> &Appointment {
        &self.to_add
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        model.add_appointment(self.to_add.clone())?;
        model.commit();
        log::info!(
            "Added {} appointment for {}",
            self.to_add.appointment_type(),
            self.to_add.nric()
        );
        Ok(CommandResult::new(format!(
            "New appointment added: {}",
            self.to_add
        )))
    }
}
