// crates/classlist-core/src/commands/mod.rs - Executable commands over the Model
//
// A Command is a tagged enum; each variant carries the already-validated
// arguments produced by the parser and knows how to execute itself against a
// Model. Execution is synchronous and runs to completion.
//
// MODULE ORGANIZATION:
// - add, edit, delete: single-student CRUD keyed by student id
// - group: batch edit adding one group to many students
// - archive: moving students between the active and archived rosters
// - remark: free-text note on the n-th student of the current view
// - find, view: commands that only change what the views show

pub mod add;
pub mod archive;
pub mod delete;
pub mod edit;
pub mod find;
pub mod group;
pub mod remark;
pub mod view;

pub use add::AddCommand;
pub use archive::{ArchiveCommand, UnarchiveCommand};
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use find::FindCommand;
pub use group::GroupCommand;
pub use remark::RemarkCommand;

use std::fmt;
use thiserror::Error;

use crate::model::{GradeDistribution, Model, ModelError};
use crate::person::{Email, StudentId};
use crate::roster::RosterError;

/// Semantic failures raised while executing a command
///
/// Messages are shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("A student with ID {0} already exists")]
    DuplicateId(StudentId),

    #[error("A student with email {0} already exists")]
    DuplicateEmail(Email),

    #[error("No student with ID {0} is in the roster")]
    StudentNotFound(StudentId),

    #[error("No student with ID {0} is in the archive")]
    ArchivedStudentNotFound(StudentId),

    #[error("The student index provided is invalid: {0}")]
    InvalidIndex(Index),

    #[error("{}{}", group::STUDENTS_NOT_FOUND, join_missing(.0))]
    MissingIds(Vec<StudentId>),
}

impl From<ModelError> for CommandError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::Roster(RosterError::DuplicateId(id)) => Self::DuplicateId(id),
            ModelError::Roster(RosterError::DuplicateEmail(email)) => Self::DuplicateEmail(email),
            ModelError::Roster(RosterError::NotFound(id)) | ModelError::NotActive(id) => {
                Self::StudentNotFound(id)
            }
            ModelError::NotArchived(id) => Self::ArchivedStudentNotFound(id),
        }
    }
}

/// Each missing id followed by a single space
fn join_missing(ids: &[StudentId]) -> String {
    ids.iter().map(|id| format!("{id} ")).collect()
}

/// Result type for command execution
pub type CommandOutcome = Result<CommandResult, CommandError>;

/// One-based position in a filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(usize);

impl Index {
    /// Returns None for zero
    pub fn from_one_based(value: usize) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which roster view the front end should show after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Active,
    Archived,
}

/// Extra payload a front end may render next to the feedback text
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment {
    GradeDistribution(GradeDistribution),
}

/// Outcome of a successfully executed command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
    pub listing: Option<Listing>,
    pub attachment: Option<Attachment>,
}

impl CommandResult {
    pub fn new<S: Into<String>>(feedback: S) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
            listing: None,
            attachment: None,
        }
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Whether the front end should pop up the attachment
    pub fn show_popup(&self) -> bool {
        self.attachment.is_some()
    }
}

/// Every command the roster understands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Group(GroupCommand),
    Archive(ArchiveCommand),
    Unarchive(UnarchiveCommand),
    Remark(RemarkCommand),
    Find(FindCommand),
    List,
    ListArchived,
    Weak,
    Summary,
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        match self {
            Self::Add(cmd) => cmd.execute(model),
            Self::Edit(cmd) => cmd.execute(model),
            Self::Delete(cmd) => cmd.execute(model),
            Self::Group(cmd) => cmd.execute(model),
            Self::Archive(cmd) => cmd.execute(model),
            Self::Unarchive(cmd) => cmd.execute(model),
            Self::Remark(cmd) => cmd.execute(model),
            Self::Find(cmd) => cmd.execute(model),
            Self::List => view::list(model),
            Self::ListArchived => view::list_archived(model),
            Self::Weak => view::weak(model),
            Self::Summary => view::summary(model),
            Self::Clear => view::clear(model),
            Self::Help => Ok(CommandResult {
                show_help: true,
                ..CommandResult::new(view::SHOWING_HELP)
            }),
            Self::Exit => Ok(CommandResult {
                exit: true,
                ..CommandResult::new(view::EXITING)
            }),
        }
    }

    /// The command word that selects this variant
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::COMMAND_WORD,
            Self::Edit(_) => EditCommand::COMMAND_WORD,
            Self::Delete(_) => DeleteCommand::COMMAND_WORD,
            Self::Group(_) => GroupCommand::COMMAND_WORD,
            Self::Archive(_) => ArchiveCommand::COMMAND_WORD,
            Self::Unarchive(_) => UnarchiveCommand::COMMAND_WORD,
            Self::Remark(_) => RemarkCommand::COMMAND_WORD,
            Self::Find(_) => FindCommand::COMMAND_WORD,
            Self::List => view::LIST_WORD,
            Self::ListArchived => view::ARCHIVED_WORD,
            Self::Weak => view::WEAK_WORD,
            Self::Summary => view::SUMMARY_WORD,
            Self::Clear => view::CLEAR_WORD,
            Self::Help => view::HELP_WORD,
            Self::Exit => view::EXIT_WORD,
        }
    }

    /// Whether executing this command can change roster contents
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add(_)
                | Self::Edit(_)
                | Self::Delete(_)
                | Self::Group(_)
                | Self::Archive(_)
                | Self::Unarchive(_)
                | Self::Remark(_)
                | Self::Clear
        )
    }
}

/// Usage lines for every command, in the order help shows them
pub fn usage() -> Vec<&'static str> {
    vec![
        AddCommand::USAGE,
        EditCommand::USAGE,
        DeleteCommand::USAGE,
        GroupCommand::USAGE,
        ArchiveCommand::USAGE,
        UnarchiveCommand::USAGE,
        RemarkCommand::USAGE,
        FindCommand::USAGE,
        view::LIST_USAGE,
        view::ARCHIVED_USAGE,
        view::WEAK_USAGE,
        view::SUMMARY_USAGE,
        view::CLEAR_USAGE,
        view::HELP_USAGE,
        view::EXIT_USAGE,
    ]
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{id, typical_model};

    #[test]
    fn test_missing_ids_message_has_trailing_spaces() {
        let error = CommandError::MissingIds(vec![id("A9999999Z"), id("A8888888Y")]);
        assert_eq!(
            error.to_string(),
            "The following IDs were not found (and not added to the group): A9999999Z A8888888Y "
        );
    }

    #[test]
    fn test_index_conversions() {
        assert!(Index::from_one_based(0).is_none());
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.one_based(), 3);
        assert_eq!(index.zero_based(), 2);
    }

    #[test]
    fn test_help_and_exit_flags() {
        let mut model = typical_model();

        let help = Command::Help.execute(&mut model).unwrap();
        assert!(help.show_help);
        assert!(!help.exit);

        let exit = Command::Exit.execute(&mut model).unwrap();
        assert!(exit.exit);
        assert!(!exit.show_popup());
    }

    #[test]
    fn test_mutating_classification() {
        assert!(Command::Clear.is_mutating());
        assert!(!Command::List.is_mutating());
        assert!(!Command::Summary.is_mutating());
        assert_eq!(Command::Weak.word(), "weak");
    }

    #[test]
    fn test_usage_covers_every_command() {
        assert_eq!(usage().len(), 15);
        assert!(usage().iter().any(|line| line.starts_with("group")));
    }
}
