// crates/classlist-core/src/commands/delete.rs - Remove a student from the active roster

use tracing::info;

use super::{CommandError, CommandOutcome, CommandResult, Listing};
use crate::model::Model;
use crate::person::StudentId;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCommand {
    student_id: StudentId,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const USAGE: &'static str =
        "delete STUDENT_ID  Deletes the student with that id, e.g. delete A0123456X";

    pub fn new(student_id: StudentId) -> Self {
        Self { student_id }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let target = model
            .get_person(&self.student_id)
            .cloned()
            .ok_or_else(|| CommandError::StudentNotFound(self.student_id.clone()))?;

        let removed = model.delete_person(&target)?;
        info!(student_id = %self.student_id, "deleted student");
        let feedback = format!("Deleted Student: {removed}");
        Ok(CommandResult::new(feedback).with_listing(Listing::Active))
    }
}
