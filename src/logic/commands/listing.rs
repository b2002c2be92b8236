//! Commands that only change which persons the list view shows

use crate::logic::commands::CommandResult;
use crate::model::person::PersonFilter;
use crate::model::Model;

pub mod find {
    pub const COMMAND_WORD: &str = "find";

    pub const MESSAGE_USAGE: &str = "find: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";
}

pub mod list {
    pub const COMMAND_WORD: &str = "list";

    pub const MESSAGE_USAGE: &str = "list: Lists all persons in the HMS.";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_filter(PersonFilter::NameKeywords(self.keywords.clone()));
        let shown = model.filtered_persons().len();
        log::debug!("find {:?} matched {} persons", self.keywords, shown);
        CommandResult::new(format!("{} persons listed!", shown)).with_list()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_filter(PersonFilter::All);
        CommandResult::new("Listed all persons").with_list()
    }
}
