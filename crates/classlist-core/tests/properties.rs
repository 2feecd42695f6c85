// crates/classlist-core/tests/properties.rs - Property tests over the Model and commands

use std::collections::BTreeSet;

use classlist_core::commands::{
    AddCommand, ArchiveCommand, DeleteCommand, EditCommand, EditPersonDescriptor, GroupCommand,
    UnarchiveCommand,
};
use classlist_core::{
    Email, Grade, Group, Model, ModelConfig, Name, Person, Remark, Roster, StudentId,
};
use indexmap::IndexSet;
use proptest::prelude::*;

fn grade() -> impl Strategy<Value = Grade> {
    prop::sample::select(Grade::ALL.to_vec())
}

fn group() -> impl Strategy<Value = Group> {
    "[A-Za-z][A-Za-z0-9]{0,6}( [0-9]{1,2})?".prop_map(|raw| Group::parse(raw).unwrap())
}

/// A roster of distinct students; ids and emails derive from the position
fn students() -> impl Strategy<Value = Vec<Person>> {
    prop::collection::vec(
        (
            "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8})?",
            grade(),
            prop::collection::btree_set(group(), 0..3),
        ),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, grade, groups))| {
                Person::new(
                    Name::parse(name).unwrap(),
                    StudentId::parse(format!("A{i:07}X")).unwrap(),
                    Email::parse(format!("student{i}@example.com")).unwrap(),
                    grade,
                    groups,
                    Remark::default(),
                )
            })
            .collect()
    })
}

fn model_of(persons: Vec<Person>) -> Model {
    Model::new(
        Roster::from_persons(persons).unwrap(),
        Roster::new(),
        ModelConfig::default(),
    )
}

fn is_sorted(roster: &Roster) -> bool {
    roster
        .persons()
        .windows(2)
        .all(|pair| Person::display_order(&pair[0], &pair[1]).is_le())
}

fn newcomer(grade: Grade) -> Person {
    Person::new(
        Name::parse("New Student").unwrap(),
        StudentId::parse("B9999999B").unwrap(),
        Email::parse("newcomer@example.com").unwrap(),
        grade,
        BTreeSet::new(),
        Remark::default(),
    )
}

proptest! {
    #[test]
    fn prop_order_independent_of_input_order(persons in students()) {
        let mut reversed = persons.clone();
        reversed.reverse();

        let forward = Roster::from_persons(persons).unwrap();
        let backward = Roster::from_persons(reversed).unwrap();

        prop_assert!(is_sorted(&forward));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_add_then_delete(persons in students(), grade in grade()) {
        let mut model = model_of(persons);
        let person = newcomer(grade);

        AddCommand::new(person.clone()).execute(&mut model).unwrap();
        prop_assert!(model.has_id(&person));
        prop_assert!(model.has_email(&person));
        prop_assert!(is_sorted(model.roster()));

        DeleteCommand::new(person.student_id().clone()).execute(&mut model).unwrap();
        prop_assert!(!model.has_id(&person));
        prop_assert!(!model.has_email(&person));
    }

    #[test]
    fn prop_repeated_set_is_idempotent(persons in students(), index in any::<prop::sample::Index>(), grade in grade()) {
        prop_assume!(!persons.is_empty());
        let target = persons[index.index(persons.len())].clone();
        let edited = Person::new(
            target.name().clone(),
            target.student_id().clone(),
            target.email().clone(),
            grade,
            target.groups().clone(),
            target.remark().clone(),
        );

        let mut once = model_of(persons.clone());
        once.set_person(&target, edited.clone()).unwrap();

        let mut twice = model_of(persons);
        twice.set_person(&target, edited.clone()).unwrap();
        twice.set_person(&edited, edited.clone()).unwrap();

        prop_assert_eq!(once.roster(), twice.roster());
        prop_assert!(is_sorted(twice.roster()));
    }

    #[test]
    fn prop_group_is_union(persons in students(), new_group in group()) {
        let mut model = model_of(persons.clone());
        let ids: IndexSet<StudentId> = persons.iter().map(|p| p.student_id().clone()).collect();

        GroupCommand::new(new_group.clone(), ids).execute(&mut model).unwrap();

        for before in &persons {
            let after = model.get_person(before.student_id()).unwrap();
            let mut expected = before.groups().clone();
            expected.insert(new_group.clone());
            prop_assert_eq!(after.groups(), &expected);
            prop_assert_eq!(after.grade(), before.grade());
        }
    }

    #[test]
    fn prop_archive_round_trip(persons in students(), index in any::<prop::sample::Index>()) {
        prop_assume!(!persons.is_empty());
        let id = persons[index.index(persons.len())].student_id().clone();
        let mut model = model_of(persons);
        let before = model.roster().clone();

        ArchiveCommand::new(id.clone()).execute(&mut model).unwrap();
        prop_assert!(model.get_person(&id).is_none());
        prop_assert!(model.get_archived_person(&id).is_some());

        UnarchiveCommand::new(id).execute(&mut model).unwrap();
        prop_assert_eq!(model.roster(), &before);
        prop_assert!(model.archived_roster().is_empty());
    }

    #[test]
    fn prop_edit_grade_keeps_order(persons in students(), index in any::<prop::sample::Index>(), grade in grade()) {
        prop_assume!(!persons.is_empty());
        let id = persons[index.index(persons.len())].student_id().clone();
        let mut model = model_of(persons);

        let descriptor = EditPersonDescriptor { grade: Some(grade), ..Default::default() };
        EditCommand::new(id.clone(), descriptor).execute(&mut model).unwrap();

        prop_assert_eq!(model.get_person(&id).unwrap().grade(), grade);
        prop_assert!(is_sorted(model.roster()));
        prop_assert_eq!(model.filtered_persons().len(), model.roster().len());
    }
}
