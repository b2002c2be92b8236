use crate::logic::commands::CommandResult;
use crate::model::person::PersonFilter;
use crate::model::record_book::RecordBook;
use crate::model::Model;

pub const COMMAND_WORD: &str = "clear";

pub const MESSAGE_USAGE: &str = "clear: Removes every person and appointment from the HMS.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.reset(RecordBook::new());
        model.update_filter(PersonFilter::All);
        model.commit();
        log::info!("Cleared the record book");
        CommandResult::new("HMS has been cleared!")
    }
}
