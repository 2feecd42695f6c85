// crates/classlist-core/src/commands/group.rs - Add many students to one group
//
// BATCH SEMANTICS:
// Ids are processed in the order given. A missing id, or one whose edit is
// rejected, is recorded and skipped; it does not stop the batch. Students that were found keep their new group
// even when the command as a whole reports failure, because the error only
// lists the ids that could not be found.

use indexmap::IndexSet;
use tracing::{debug, info};

use super::edit::{EditCommand, EditPersonDescriptor};
use super::{CommandError, CommandOutcome, CommandResult, Listing};
use crate::model::Model;
use crate::person::{Group, StudentId};

pub const MESSAGE_GROUP_SUCCESS: &str = "All students were added!";
pub const STUDENTS_NOT_FOUND: &str =
    "The following IDs were not found (and not added to the group): ";

#[derive(Debug, Clone, PartialEq)]
pub struct GroupCommand {
    group: Group,
    student_ids: IndexSet<StudentId>,
}

impl GroupCommand {
    pub const COMMAND_WORD: &'static str = "group";
    pub const USAGE: &'static str = "group g/GROUP id/STUDENT_ID [id/STUDENT_ID]...  Adds every listed student to the group, e.g. group g/Group 3 id/A0123456X id/A0123456H";

    pub fn new(group: Group, student_ids: IndexSet<StudentId>) -> Self {
        Self { group, student_ids }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let mut missing = Vec::new();

        for student_id in &self.student_ids {
            let Some(person) = model.get_person(student_id) else {
                missing.push(student_id.clone());
                continue;
            };

            let mut groups = person.groups().clone();
            groups.insert(self.group.clone());
            let descriptor = EditPersonDescriptor {
                groups: Some(groups),
                ..Default::default()
            };
            let edit = EditCommand::new(student_id.clone(), descriptor);
            if let Err(error) = edit.execute(model) {
                debug!(%student_id, %error, "could not add student to group");
                missing.push(student_id.clone());
            }
        }

        if missing.is_empty() {
            info!(group = %self.group, count = self.student_ids.len(), "grouped students");
            Ok(CommandResult::new(MESSAGE_GROUP_SUCCESS).with_listing(Listing::Active))
        } else {
            info!(group = %self.group, missing = missing.len(), "some students were not found");
            Err(CommandError::MissingIds(missing))
        }
    }
}
