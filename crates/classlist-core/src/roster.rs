// crates/classlist-core/src/roster.rs - Ordered, unique-key collection of students
//
// INVARIANTS:
// - No two persons share a StudentId
// - No two persons share an Email
// - Iteration order always follows Person::display_order
//
// Every mutating method either upholds all three or returns an error without
// touching the collection.

use thiserror::Error;
use tracing::debug;

use crate::person::{Email, Person, StudentId};

/// Errors raised when a roster operation would break an invariant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("A student with ID {0} already exists")]
    DuplicateId(StudentId),

    #[error("A student with email {0} already exists")]
    DuplicateEmail(Email),

    #[error("Student {0} is not in the roster")]
    NotFound(StudentId),
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    persons: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from loaded records, rejecting duplicates
    pub fn from_persons<I>(persons: I) -> RosterResult<Self>
    where
        I: IntoIterator<Item = Person>,
    {
        let mut roster = Self::new();
        for person in persons {
            roster.check_unique(&person)?;
            roster.persons.push(person);
        }
        roster.sort();
        Ok(roster)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Exact value membership
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p == person)
    }

    pub fn has_id(&self, id: &StudentId) -> bool {
        self.persons.iter().any(|p| p.student_id() == id)
    }

    pub fn has_email(&self, email: &Email) -> bool {
        self.persons.iter().any(|p| p.email() == email)
    }

    pub fn find(&self, id: &StudentId) -> Option<&Person> {
        self.persons.iter().find(|p| p.student_id() == id)
    }

    /// Insert a person and restore display order
    pub fn add(&mut self, person: Person) -> RosterResult<()> {
        self.check_unique(&person)?;
        debug!(student_id = %person.student_id(), "adding person to roster");
        self.persons.push(person);
        self.sort();
        Ok(())
    }

    /// Replace `target` with `edited` and restore display order
    ///
    /// The edited value may change the id or email, as long as the new value
    /// does not collide with a different person.
    pub fn set(&mut self, target: &Person, edited: Person) -> RosterResult<()> {
        let position = self
            .position_of(target)
            .ok_or_else(|| RosterError::NotFound(target.student_id().clone()))?;

        if !edited.is_same_student(target) && self.has_id(edited.student_id()) {
            return Err(RosterError::DuplicateId(edited.student_id().clone()));
        }
        if edited.email() != target.email() && self.has_email(edited.email()) {
            return Err(RosterError::DuplicateEmail(edited.email().clone()));
        }

        debug!(
            from = %target.student_id(),
            to = %edited.student_id(),
            "replacing person in roster"
        );
        self.persons[position] = edited;
        self.sort();
        Ok(())
    }

    /// Remove the record equal to `target`
    pub fn remove(&mut self, target: &Person) -> RosterResult<Person> {
        let position = self
            .position_of(target)
            .ok_or_else(|| RosterError::NotFound(target.student_id().clone()))?;
        debug!(student_id = %target.student_id(), "removing person from roster");
        Ok(self.persons.remove(position))
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    /// Stable sort by the display comparator
    pub fn sort(&mut self) {
        self.persons.sort_by(Person::display_order);
    }

    fn position_of(&self, target: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p == target)
    }

    fn check_unique(&self, person: &Person) -> RosterResult<()> {
        if self.has_id(person.student_id()) {
            return Err(RosterError::DuplicateId(person.student_id().clone()));
        }
        if self.has_email(person.email()) {
            return Err(RosterError::DuplicateEmail(person.email().clone()));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{Grade, Group, Name, Remark};
    use std::collections::BTreeSet;

    fn person(name: &str, id: &str, email: &str, grade: Grade) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            StudentId::parse(id).unwrap(),
            Email::parse(email).unwrap(),
            grade,
            BTreeSet::new(),
            Remark::default(),
        )
    }

    fn ids(roster: &Roster) -> Vec<&str> {
        roster.iter().map(|p| p.student_id().as_str()).collect()
    }

    #[test]
    fn test_add_keeps_display_order() {
        let mut roster = Roster::new();
        roster
            .add(person("Alice", "A0000000A", "alice@example.com", Grade::A))
            .unwrap();
        roster
            .add(person("Benson", "A0000001B", "benson@example.com", Grade::D))
            .unwrap();
        roster
            .add(person("Carl", "A0000002C", "carl@example.com", Grade::A))
            .unwrap();

        assert_eq!(ids(&roster), vec!["A0000001B", "A0000000A", "A0000002C"]);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut roster = Roster::new();
        roster
            .add(person("Alice", "A0000000A", "alice@example.com", Grade::A))
            .unwrap();

        let same_id = person("Other", "A0000000A", "other@example.com", Grade::B);
        assert_eq!(
            roster.add(same_id),
            Err(RosterError::DuplicateId(StudentId::parse("A0000000A").unwrap()))
        );

        let same_email = person("Other", "A0000009Z", "alice@example.com", Grade::B);
        assert!(matches!(
            roster.add(same_email),
            Err(RosterError::DuplicateEmail(_))
        ));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_set_replaces_and_resorts() {
        let alice = person("Alice", "A0000000A", "alice@example.com", Grade::A);
        let benson = person("Benson", "A0000001B", "benson@example.com", Grade::B);
        let mut roster = Roster::from_persons(vec![alice.clone(), benson.clone()]).unwrap();
        assert_eq!(ids(&roster), vec!["A0000001B", "A0000000A"]);

        let failing = person("Alice", "A0000000A", "alice@example.com", Grade::F);
        roster.set(&alice, failing.clone()).unwrap();

        assert_eq!(ids(&roster), vec!["A0000000A", "A0000001B"]);
        assert!(roster.contains(&failing));
        assert!(!roster.contains(&alice));
    }

    #[test]
    fn test_set_rejects_collisions_with_other_students() {
        let alice = person("Alice", "A0000000A", "alice@example.com", Grade::A);
        let benson = person("Benson", "A0000001B", "benson@example.com", Grade::B);
        let mut roster = Roster::from_persons(vec![alice.clone(), benson]).unwrap();

        let stolen_id = person("Alice", "A0000001B", "alice@example.com", Grade::A);
        assert!(matches!(
            roster.set(&alice, stolen_id),
            Err(RosterError::DuplicateId(_))
        ));

        let stolen_email = person("Alice", "A0000000A", "benson@example.com", Grade::A);
        assert!(matches!(
            roster.set(&alice, stolen_email),
            Err(RosterError::DuplicateEmail(_))
        ));

        assert!(roster.contains(&alice));
    }

    #[test]
    fn test_set_missing_target() {
        let mut roster = Roster::new();
        let ghost = person("Ghost", "A9999999Z", "ghost@example.com", Grade::C);
        assert!(matches!(
            roster.set(&ghost, ghost.clone()),
            Err(RosterError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove_by_value() {
        let alice = person("Alice", "A0000000A", "alice@example.com", Grade::A);
        let mut roster = Roster::from_persons(vec![alice.clone()]).unwrap();

        // A different value of the same student is not removed
        let changed = alice.with_groups(BTreeSet::from([Group::parse("T1").unwrap()]));
        assert!(roster.remove(&changed).is_err());

        assert_eq!(roster.remove(&alice).unwrap(), alice);
        assert!(roster.is_empty());
        assert!(!roster.has_id(alice.student_id()));
        assert!(!roster.has_email(alice.email()));
    }

    #[test]
    fn test_from_persons_rejects_duplicates() {
        let result = Roster::from_persons(vec![
            person("Alice", "A0000000A", "alice@example.com", Grade::A),
            person("Alice Again", "A0000000A", "again@example.com", Grade::A),
        ]);
        assert!(matches!(result, Err(RosterError::DuplicateId(_))));
    }
}
