// crates/classlist-core/src/commands/view.rs - Argument-less commands
//
// These take no arguments. All but clear only change what the filtered
// views show or which flags the front end sees.

use tracing::info;

use super::{Attachment, CommandOutcome, CommandResult, Listing};
use crate::filter::PersonFilter;
use crate::model::Model;
use crate::roster::Roster;

pub const LIST_WORD: &str = "list";
pub const ARCHIVED_WORD: &str = "archived";
pub const WEAK_WORD: &str = "weak";
pub const SUMMARY_WORD: &str = "summary";
pub const CLEAR_WORD: &str = "clear";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const LIST_USAGE: &str = "list  Lists every active student";
pub const ARCHIVED_USAGE: &str = "archived  Lists every archived student";
pub const WEAK_USAGE: &str = "weak  Lists students at or below the weak grade threshold";
pub const SUMMARY_USAGE: &str = "summary  Shows how many active students hold each grade";
pub const CLEAR_USAGE: &str = "clear  Removes every student from the active roster";
pub const HELP_USAGE: &str = "help  Shows this help";
pub const EXIT_USAGE: &str = "exit  Saves and quits";

pub const MESSAGE_LIST_SUCCESS: &str = "Listed all students";
pub const MESSAGE_ARCHIVED_SUCCESS: &str = "Listed all archived students";
pub const MESSAGE_SUMMARY_SUCCESS: &str = "Opened grade summary";
pub const MESSAGE_CLEAR_SUCCESS: &str = "Student list has been cleared!";
pub const SHOWING_HELP: &str = "Opened help window.";
pub const EXITING: &str = "Exiting class list as requested ...";

pub(super) fn list(model: &mut Model) -> CommandOutcome {
    model.update_filtered_person_list(PersonFilter::All);
    Ok(CommandResult::new(MESSAGE_LIST_SUCCESS).with_listing(Listing::Active))
}

pub(super) fn list_archived(model: &mut Model) -> CommandOutcome {
    model.update_filtered_archived_list(PersonFilter::All);
    Ok(CommandResult::new(MESSAGE_ARCHIVED_SUCCESS).with_listing(Listing::Archived))
}

pub(super) fn weak(model: &mut Model) -> CommandOutcome {
    model.update_filtered_person_list(PersonFilter::Weak);
    let count = model.filtered_persons().len();
    let feedback = format!(
        "{count} students at or below grade {}",
        model.weak_threshold()
    );
    Ok(CommandResult::new(feedback).with_listing(Listing::Active))
}

pub(super) fn summary(model: &mut Model) -> CommandOutcome {
    let distribution = model.grade_distribution();
    Ok(CommandResult::new(MESSAGE_SUMMARY_SUCCESS)
        .with_attachment(Attachment::GradeDistribution(distribution)))
}

/// Empties the active roster; the archive is left alone
pub(super) fn clear(model: &mut Model) -> CommandOutcome {
    let removed = model.roster().len();
    model.set_roster(Roster::new());
    info!(removed, "cleared active roster");
    Ok(CommandResult::new(MESSAGE_CLEAR_SUCCESS).with_listing(Listing::Active))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::commands::fixtures::{id, typical_model};
    use crate::person::Grade;

    #[test]
    fn test_list_resets_filter() {
        let mut model = typical_model();
        model.update_filtered_person_list(PersonFilter::Weak);

        let result = Command::List.execute(&mut model).unwrap();

        assert_eq!(result.feedback, MESSAGE_LIST_SUCCESS);
        assert_eq!(model.active_filter(), &PersonFilter::All);
        assert_eq!(model.filtered_persons().len(), 3);
    }

    #[test]
    fn test_weak_uses_threshold() {
        let mut model = typical_model();
        let result = Command::Weak.execute(&mut model).unwrap();

        assert_eq!(result.feedback, "2 students at or below grade C");
        let ids: Vec<_> = model
            .filtered_persons()
            .iter()
            .map(|p| p.student_id().clone())
            .collect();
        assert_eq!(ids, vec![id("A0000001B"), id("A0000002C")]);
    }

    #[test]
    fn test_summary_attaches_distribution() {
        let mut model = typical_model();
        let result = Command::Summary.execute(&mut model).unwrap();

        assert!(result.show_popup());
        let Some(Attachment::GradeDistribution(distribution)) = result.attachment else {
            panic!("summary should attach a distribution");
        };
        assert_eq!(distribution.total(), 3);
        assert_eq!(distribution.count(Grade::D), 1);
        assert_eq!(distribution.count(Grade::BPlus), 0);
    }

    #[test]
    fn test_clear_keeps_archive() {
        let mut model = typical_model();
        model.archive_person(&id("A0000000A")).unwrap();

        Command::Clear.execute(&mut model).unwrap();

        assert!(model.roster().is_empty());
        assert!(model.filtered_persons().is_empty());
        assert_eq!(model.archived_roster().len(), 1);
    }

    #[test]
    fn test_archived_listing() {
        let mut model = typical_model();
        model.archive_person(&id("A0000002C")).unwrap();

        let result = Command::ListArchived.execute(&mut model).unwrap();
        assert_eq!(result.listing, Some(Listing::Archived));
        assert_eq!(model.filtered_archived_persons().len(), 1);
    }
}
