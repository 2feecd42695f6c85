// crates/classlist-core/src/commands/find.rs - Filter the active view by name keywords

use super::{CommandOutcome, CommandResult, Listing};
use crate::filter::PersonFilter;
use crate::model::Model;

#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const USAGE: &'static str = "find KEYWORD [KEYWORD]...  Lists students whose names contain any of the words, e.g. find alice bob";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        model.update_filtered_person_list(PersonFilter::NameKeywords(self.keywords.clone()));
        let count = model.filtered_persons().len();
        let feedback = format!("{count} students listed!");
        Ok(CommandResult::new(feedback).with_listing(Listing::Active))
    }
}
