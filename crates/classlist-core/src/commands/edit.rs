// crates/classlist-core/src/commands/edit.rs - Edit the fields of one student
//
// Edit is also the generic replace-in-place pathway: GroupCommand builds a
// descriptor that only touches groups and runs it through here, so both share
// the same uniqueness checks.

use std::collections::BTreeSet;
use tracing::info;

use super::{CommandError, CommandOutcome, CommandResult, Listing};
use crate::filter::PersonFilter;
use crate::model::Model;
use crate::person::{Email, Grade, Group, Name, Person, StudentId};

/// Fields to overwrite; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub student_id: Option<StudentId>,
    pub email: Option<Email>,
    pub grade: Option<Grade>,
    pub groups: Option<BTreeSet<Group>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.student_id.is_some()
            || self.email.is_some()
            || self.grade.is_some()
            || self.groups.is_some()
    }

    /// Build the edited value; the remark is carried over unchanged
    pub fn apply(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.student_id
                .clone()
                .unwrap_or_else(|| person.student_id().clone()),
            self.email
                .clone()
                .unwrap_or_else(|| person.email().clone()),
            self.grade.unwrap_or(person.grade()),
            self.groups
                .clone()
                .unwrap_or_else(|| person.groups().clone()),
            person.remark().clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    student_id: StudentId,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const USAGE: &'static str = "edit STUDENT_ID [n/NAME] [id/STUDENT_ID] [e/EMAIL] [gr/GRADE] [g/GROUP]...  Edits a student; g/ with no value clears all groups";

    pub fn new(student_id: StudentId, descriptor: EditPersonDescriptor) -> Self {
        Self {
            student_id,
            descriptor,
        }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let target = model
            .get_person(&self.student_id)
            .cloned()
            .ok_or_else(|| CommandError::StudentNotFound(self.student_id.clone()))?;
        let edited = self.descriptor.apply(&target);

        if edited.student_id() != target.student_id()
            && (model.has_id(&edited) || model.has_archived_id(&edited))
        {
            return Err(CommandError::DuplicateId(edited.student_id().clone()));
        }
        if edited.email() != target.email()
            && (model.has_email(&edited) || model.has_archived_email(&edited))
        {
            return Err(CommandError::DuplicateEmail(edited.email().clone()));
        }

        model.set_person(&target, edited.clone())?;
        model.update_filtered_person_list(PersonFilter::All);
        info!(student_id = %self.student_id, "edited student");
        let feedback = format!("Edited Student: {edited}");
        Ok(CommandResult::new(feedback).with_listing(Listing::Active))
    }
}
