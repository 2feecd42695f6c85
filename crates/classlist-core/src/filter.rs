// crates/classlist-core/src/filter.rs - Predicates and live projections of a roster
//
// A FilteredView stores the positions of the roster entries that pass its
// filter. Positions go stale the moment the roster changes, so the Model
// refreshes every view synchronously after each mutation and after every
// filter change. Nothing else caches a projection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::person::{Grade, Group, Person};
use crate::roster::Roster;

/// Predicate selecting which students a view shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum PersonFilter {
    /// Everyone
    #[default]
    All,
    /// Any name word equals any keyword, ignoring case
    NameKeywords(Vec<String>),
    /// Member of any of the groups
    Groups(Vec<Group>),
    /// Graded at or below the model's weak threshold
    Weak,
}

impl PersonFilter {
    pub fn matches(&self, person: &Person, weak_threshold: Grade) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => keywords
                .iter()
                .any(|keyword| person.name().contains_word(keyword)),
            Self::Groups(groups) => groups.iter().any(|g| person.groups().contains(g)),
            Self::Weak => person.is_weak(weak_threshold),
        }
    }
}

impl fmt::Display for PersonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::NameKeywords(keywords) => write!(f, "name in [{}]", keywords.join(", ")),
            Self::Groups(groups) => {
                let names: Vec<&str> = groups.iter().map(|g| g.as_str()).collect();
                write!(f, "group in [{}]", names.join(", "))
            }
            Self::Weak => write!(f, "weak"),
        }
    }
}

/// Order-preserving projection of a roster
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    filter: PersonFilter,
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn new(filter: PersonFilter, roster: &Roster, weak_threshold: Grade) -> Self {
        let mut view = Self {
            filter,
            indices: Vec::new(),
        };
        view.refresh(roster, weak_threshold);
        view
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: PersonFilter, roster: &Roster, weak_threshold: Grade) {
        self.filter = filter;
        self.refresh(roster, weak_threshold);
    }

    /// Recompute the projection against the current roster contents
    pub fn refresh(&mut self, roster: &Roster, weak_threshold: Grade) {
        let filter = &self.filter;
        self.indices = roster
            .iter()
            .enumerate()
            .filter(|(_, person)| filter.matches(person, weak_threshold))
            .map(|(index, _)| index)
            .collect();
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn project<'a>(&self, roster: &'a Roster) -> Vec<&'a Person> {
        self.indices
            .iter()
            .filter_map(|&index| roster.persons().get(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{Email, Name, Remark, StudentId};
    use std::collections::BTreeSet;

    fn person(name: &str, id: &str, grade: Grade, groups: &[&str]) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            StudentId::parse(id).unwrap(),
            Email::parse(format!("{}@example.com", id.to_lowercase())).unwrap(),
            grade,
            groups
                .iter()
                .map(|g| Group::parse(g).unwrap())
                .collect::<BTreeSet<_>>(),
            Remark::default(),
        )
    }

    fn roster() -> Roster {
        Roster::from_persons(vec![
            person("Alice Pauline", "A0000000A", Grade::A, &["Group 1"]),
            person("Benson Meier", "A0000001B", Grade::D, &["Group 2"]),
            person("Carl Kurz", "A0000002C", Grade::C, &["Group 1", "Group 2"]),
        ])
        .unwrap()
    }

    fn names(view: &FilteredView, roster: &Roster) -> Vec<String> {
        view.project(roster)
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn test_name_keywords_match_whole_words_ignoring_case() {
        let roster = roster();
        let view = FilteredView::new(
            PersonFilter::NameKeywords(vec!["alice".into(), "KURZ".into()]),
            &roster,
            Grade::C,
        );
        assert_eq!(names(&view, &roster), vec!["Carl Kurz", "Alice Pauline"]);

        let partial = FilteredView::new(
            PersonFilter::NameKeywords(vec!["Ali".into()]),
            &roster,
            Grade::C,
        );
        assert!(partial.is_empty());
    }

    #[test]
    fn test_group_and_weak_filters() {
        let roster = roster();
        let group_one = FilteredView::new(
            PersonFilter::Groups(vec![Group::parse("Group 1").unwrap()]),
            &roster,
            Grade::C,
        );
        assert_eq!(names(&group_one, &roster), vec!["Carl Kurz", "Alice Pauline"]);

        let weak = FilteredView::new(PersonFilter::Weak, &roster, Grade::C);
        assert_eq!(names(&weak, &roster), vec!["Benson Meier", "Carl Kurz"]);
    }

    #[test]
    fn test_refresh_follows_roster_changes() {
        let mut roster = roster();
        let mut view = FilteredView::new(PersonFilter::All, &roster, Grade::C);
        assert_eq!(view.len(), 3);

        roster.clear();
        view.refresh(&roster, Grade::C);
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_serde_shape() {
        let filter: PersonFilter = serde_json::from_str(r#"{"kind":"weak"}"#).unwrap();
        assert_eq!(filter, PersonFilter::Weak);

        let filter: PersonFilter =
            serde_json::from_str(r#"{"kind":"groups","values":["Group 1"]}"#).unwrap();
        assert_eq!(
            filter,
            PersonFilter::Groups(vec![Group::parse("Group 1").unwrap()])
        );
    }
}
