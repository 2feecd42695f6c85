// crates/classlist-core/src/model.rs - In-memory model of the active and archived rosters
//
// The Model exclusively owns both rosters and the filtered views over them.
// All mutation goes through the methods below, each of which leaves the views
// refreshed before returning. There is one caller at a time (the command
// loop), so no locking is involved.
//
// ARCHIVE / UNARCHIVE:
// Moving a student between rosters is a single operation. Every precondition
// is checked before either roster is touched, so a student is never left in
// both rosters or in neither.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::filter::{FilteredView, PersonFilter};
use crate::person::{Grade, Person, StudentId};
use crate::roster::{Roster, RosterError};

/// Errors raised by model operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Student {0} is not in the active roster")]
    NotActive(StudentId),

    #[error("Student {0} is not in the archive")]
    NotArchived(StudentId),
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Construction-time settings for the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Filter applied to the active view when the model is created
    pub starting_filter: PersonFilter,
    /// Students graded at or below this are classified weak
    pub weak_threshold: Grade,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            starting_filter: PersonFilter::All,
            weak_threshold: Grade::C,
        }
    }
}

/// Number of active students holding each grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeDistribution {
    counts: Vec<(Grade, usize)>,
}

impl GradeDistribution {
    /// Per-grade counts in ascending grade order, zeros included
    pub fn counts(&self) -> &[(Grade, usize)] {
        &self.counts
    }

    pub fn count(&self, grade: Grade) -> usize {
        self.counts
            .iter()
            .find(|(g, _)| *g == grade)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

#[derive(Debug, Clone)]
pub struct Model {
    roster: Roster,
    archived: Roster,
    weak_threshold: Grade,
    filtered: FilteredView,
    filtered_archived: FilteredView,
}

impl Model {
    pub fn new(roster: Roster, archived: Roster, config: ModelConfig) -> Self {
        debug!(
            active = roster.len(),
            archived = archived.len(),
            filter = %config.starting_filter,
            "initializing model"
        );
        let filtered = FilteredView::new(config.starting_filter, &roster, config.weak_threshold);
        let filtered_archived =
            FilteredView::new(PersonFilter::All, &archived, config.weak_threshold);
        let mut model = Self {
            roster,
            archived,
            weak_threshold: config.weak_threshold,
            filtered,
            filtered_archived,
        };
        model.roster.sort();
        model.archived.sort();
        model.refresh_views();
        model
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn archived_roster(&self) -> &Roster {
        &self.archived
    }

    pub fn weak_threshold(&self) -> Grade {
        self.weak_threshold
    }

    /// Replace the active roster's contents
    pub fn set_roster(&mut self, roster: Roster) {
        self.roster = roster;
        self.roster.sort();
        self.refresh_views();
    }

    /// Replace the archived roster's contents
    pub fn set_archived_roster(&mut self, archived: Roster) {
        self.archived = archived;
        self.archived.sort();
        self.refresh_views();
    }

    // ---- active roster ----

    pub fn has_person(&self, person: &Person) -> bool {
        self.roster.contains(person)
    }

    pub fn has_id(&self, person: &Person) -> bool {
        self.roster.has_id(person.student_id())
    }

    pub fn has_email(&self, person: &Person) -> bool {
        self.roster.has_email(person.email())
    }

    pub fn get_person(&self, id: &StudentId) -> Option<&Person> {
        self.roster.find(id)
    }

    /// Insert into the active roster and reset its view to show everyone
    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        self.roster.add(person)?;
        self.filtered.set_filter(PersonFilter::All, &self.roster, self.weak_threshold);
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        self.roster.set(target, edited)?;
        self.refresh_views();
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> ModelResult<Person> {
        let removed = self.roster.remove(target)?;
        self.refresh_views();
        Ok(removed)
    }

    /// Active students classified weak, in display order
    pub fn weak(&self) -> Vec<&Person> {
        self.roster
            .iter()
            .filter(|person| person.is_weak(self.weak_threshold))
            .collect()
    }

    pub fn grade_distribution(&self) -> GradeDistribution {
        let counts = Grade::ALL
            .into_iter()
            .map(|grade| {
                let count = self.roster.iter().filter(|p| p.grade() == grade).count();
                (grade, count)
            })
            .collect();
        GradeDistribution { counts }
    }

    // ---- archived roster ----

    pub fn has_archived_person(&self, person: &Person) -> bool {
        self.archived.contains(person)
    }

    pub fn has_archived_id(&self, person: &Person) -> bool {
        self.archived.has_id(person.student_id())
    }

    pub fn has_archived_email(&self, person: &Person) -> bool {
        self.archived.has_email(person.email())
    }

    pub fn get_archived_person(&self, id: &StudentId) -> Option<&Person> {
        self.archived.find(id)
    }

    pub fn set_archived_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        self.archived.set(target, edited)?;
        self.refresh_views();
        Ok(())
    }

    pub fn delete_archived_person(&mut self, target: &Person) -> ModelResult<Person> {
        let removed = self.archived.remove(target)?;
        self.refresh_views();
        Ok(removed)
    }

    // ---- moving between rosters ----

    /// Move a student from the active roster into the archive
    pub fn archive_person(&mut self, id: &StudentId) -> ModelResult<Person> {
        let person = self
            .roster
            .find(id)
            .cloned()
            .ok_or_else(|| ModelError::NotActive(id.clone()))?;
        Self::check_room(&self.archived, &person)?;

        self.roster.remove(&person)?;
        self.archived.add(person.clone())?;
        self.refresh_views();
        info!(student_id = %id, "archived student");
        Ok(person)
    }

    /// Move a student from the archive back into the active roster
    ///
    /// Like an add, this resets the active view to show everyone.
    pub fn unarchive_person(&mut self, id: &StudentId) -> ModelResult<Person> {
        let person = self
            .archived
            .find(id)
            .cloned()
            .ok_or_else(|| ModelError::NotArchived(id.clone()))?;
        Self::check_room(&self.roster, &person)?;

        self.archived.remove(&person)?;
        self.roster.add(person.clone())?;
        self.filtered.set_filter(PersonFilter::All, &self.roster, self.weak_threshold);
        self.refresh_views();
        info!(student_id = %id, "unarchived student");
        Ok(person)
    }

    // ---- filtered views ----

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.filtered.project(&self.roster)
    }

    pub fn filtered_archived_persons(&self) -> Vec<&Person> {
        self.filtered_archived.project(&self.archived)
    }

    pub fn active_filter(&self) -> &PersonFilter {
        self.filtered.filter()
    }

    pub fn archived_filter(&self) -> &PersonFilter {
        self.filtered_archived.filter()
    }

    pub fn update_filtered_person_list(&mut self, filter: PersonFilter) {
        debug!(filter = %filter, "updating active view");
        self.filtered.set_filter(filter, &self.roster, self.weak_threshold);
    }

    pub fn update_filtered_archived_list(&mut self, filter: PersonFilter) {
        debug!(filter = %filter, "updating archived view");
        self.filtered_archived.set_filter(filter, &self.archived, self.weak_threshold);
    }

    fn refresh_views(&mut self) {
        self.filtered.refresh(&self.roster, self.weak_threshold);
        self.filtered_archived.refresh(&self.archived, self.weak_threshold);
    }

    fn check_room(destination: &Roster, person: &Person) -> ModelResult<()> {
        if destination.has_id(person.student_id()) {
            return Err(RosterError::DuplicateId(person.student_id().clone()).into());
        }
        if destination.has_email(person.email()) {
            return Err(RosterError::DuplicateEmail(person.email().clone()).into());
        }
        Ok(())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Roster::new(), Roster::new(), ModelConfig::default())
    }
}
