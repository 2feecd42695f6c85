// crates/classlist-core/src/commands/add.rs - Add a new student

use tracing::info;

use super::{CommandError, CommandOutcome, CommandResult, Listing};
use crate::model::Model;
use crate::person::Person;

/// Adds a student to the active roster
///
/// The id and email must be unused in both rosters, so that a later
/// archive or unarchive can never collide.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const USAGE: &'static str = "add n/NAME id/STUDENT_ID e/EMAIL gr/GRADE [g/GROUP]...  Adds a student, e.g. add n/Alice Tan id/A0123456X e/alice@example.com gr/B+ g/Group 1";

    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let person = &self.person;
        if model.has_id(person) || model.has_archived_id(person) {
            return Err(CommandError::DuplicateId(person.student_id().clone()));
        }
        if model.has_email(person) || model.has_archived_email(person) {
            return Err(CommandError::DuplicateEmail(person.email().clone()));
        }

        model.add_person(person.clone())?;
        info!(student_id = %person.student_id(), "added student");
        let feedback = format!("New student added: {person}");
        Ok(CommandResult::new(feedback).with_listing(Listing::Active))
    }
}
