// crates/classlist-core/src/commands/archive.rs - Move students between rosters
//
// Both directions delegate to a single Model operation, which checks every
// precondition before touching either roster.

use super::{CommandOutcome, CommandResult, Listing};
use crate::model::Model;
use crate::person::StudentId;

#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveCommand {
    student_id: StudentId,
}

impl ArchiveCommand {
    pub const COMMAND_WORD: &'static str = "archive";
    pub const USAGE: &'static str =
        "archive STUDENT_ID  Moves a student into the archive, e.g. archive A0123456X";

    pub fn new(student_id: StudentId) -> Self {
        Self { student_id }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let person = model.archive_person(&self.student_id)?;
        let feedback = format!("Archived Student: {person}");
        Ok(CommandResult::new(feedback).with_listing(Listing::Active))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnarchiveCommand {
    student_id: StudentId,
}

impl UnarchiveCommand {
    pub const COMMAND_WORD: &'static str = "unarchive";
    pub const USAGE: &'static str =
        "unarchive STUDENT_ID  Moves a student out of the archive, e.g. unarchive A0123456X";

    pub fn new(student_id: StudentId) -> Self {
        Self { student_id }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let person = model.unarchive_person(&self.student_id)?;
        let feedback = format!("Unarchived Student: {person}");
        Ok(CommandResult::new(feedback).with_listing(Listing::Active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;
    use crate::commands::fixtures::{id, typical_model};

    #[test]
    fn test_archive_then_unarchive_round_trips() {
        let mut model = typical_model();
        let before = model.roster().clone();

        let archived = ArchiveCommand::new(id("A0000000A"))
            .execute(&mut model)
            .unwrap();
        assert!(archived.feedback.starts_with("Archived Student: Alice Pauline"));
        assert_eq!(model.roster().len(), 2);
        assert_eq!(model.archived_roster().len(), 1);

        UnarchiveCommand::new(id("A0000000A"))
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.roster(), &before);
        assert!(model.archived_roster().is_empty());
    }

    #[test]
    fn test_archive_unknown_student() {
        let mut model = typical_model();
        let error = ArchiveCommand::new(id("A9999999Z"))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(error, CommandError::StudentNotFound(id("A9999999Z")));
    }

    #[test]
    fn test_unarchive_student_not_in_archive() {
        let mut model = typical_model();
        let error = UnarchiveCommand::new(id("A0000000A"))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(error, CommandError::ArchivedStudentNotFound(id("A0000000A")));
        assert_eq!(model.roster().len(), 3);
    }
}
