// crates/classlist-core/src/commands/remark.rs - Attach a free-text remark

use tracing::info;

use super::{CommandError, CommandOutcome, CommandResult, Index, Listing};
use crate::filter::PersonFilter;
use crate::model::Model;
use crate::person::Remark;

/// Sets the remark of the student at a position of the current view
///
/// Any text is accepted. An empty remark clears the existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct RemarkCommand {
    index: Index,
    remark: Remark,
}

impl RemarkCommand {
    pub const COMMAND_WORD: &'static str = "remark";
    pub const USAGE: &'static str = "remark INDEX r/[REMARK]  Sets the remark of the student at INDEX in the displayed list, e.g. remark 1 r/Likes to swim";

    pub fn new(index: Index, remark: Remark) -> Self {
        Self { index, remark }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let target = model
            .filtered_persons()
            .get(self.index.zero_based())
            .map(|person| (*person).clone())
            .ok_or(CommandError::InvalidIndex(self.index))?;

        let edited = target.with_remark(self.remark.clone());
        model.set_person(&target, edited.clone())?;
        model.update_filtered_person_list(PersonFilter::All);
        info!(student_id = %edited.student_id(), "updated remark");

        let feedback = if self.remark.is_empty() {
            format!("Removed remark from Student: {edited}")
        } else {
            format!("Added remark to Student: {edited}")
        };
        Ok(CommandResult::new(feedback).with_listing(Listing::Active))
    }
}
