// crates/classlist-core/src/person.rs - Student records and their validated fields
//
// A Person is an immutable value. Every field is a small newtype that can only
// be constructed through validation, so a Person that exists is always valid.
// Editing never mutates in place: it builds a new Person which the Model then
// substitutes for the old one.
//
// FIELD FORMATS:
// - StudentId: one uppercase letter, seven digits, one uppercase letter (A0123456X)
// - Name:      alphanumerics and spaces, not blank
// - Email:     local-part@domain with at least a two character final label
// - Grade:     A+ A A- B+ B B- C+ C D+ D F
// - Group:     alphanumerics and spaces, not blank ("Group 99")
// - Remark:    anything at all, including the empty string

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors raised when a raw string does not satisfy a field's format
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank (got '{0}')")]
    InvalidName(String),

    #[error("Student IDs should be one uppercase letter, seven digits and one uppercase letter, e.g. A0123456X (got '{0}')")]
    InvalidStudentId(String),

    #[error("Emails should be of the format local-part@domain, e.g. alice@example.com (got '{0}')")]
    InvalidEmail(String),

    #[error("Grades should be one of A+, A, A-, B+, B, B-, C+, C, D+, D, F (got '{0}')")]
    InvalidGrade(String),

    #[error("Group names should only contain alphanumeric characters and spaces, and it should not be blank (got '{0}')")]
    InvalidGroup(String),
}

/// Result type for field validation
pub type FieldResult<T> = Result<T, FieldError>;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));

static STUDENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]{7}[A-Z]$").expect("valid student id regex"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9+_.-]*[A-Za-z0-9])?@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
    )
    .expect("valid email regex")
});

/// A student's display name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse<S: AsRef<str>>(s: S) -> FieldResult<Self> {
        let trimmed = s.as_ref().trim();
        if NAME_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(FieldError::InvalidName(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whole-word, case-insensitive keyword match against any word of the name
    pub fn contains_word(&self, keyword: &str) -> bool {
        self.0
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(keyword))
    }
}

/// Unique, immutable identity of a student
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    /// Parse a student id; input is trimmed and upper-cased first
    pub fn parse<S: AsRef<str>>(s: S) -> FieldResult<Self> {
        let normalized = s.as_ref().trim().to_ascii_uppercase();
        if STUDENT_ID_PATTERN.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(FieldError::InvalidStudentId(s.as_ref().trim().to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contact email, unique within a roster
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse<S: AsRef<str>>(s: S) -> FieldResult<Self> {
        let trimmed = s.as_ref().trim();
        if EMAIL_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(FieldError::InvalidEmail(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A name-tagged label; students can belong to any number of groups
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Group(String);

impl Group {
    pub fn parse<S: AsRef<str>>(s: S) -> FieldResult<Self> {
        let trimmed = s.as_ref().trim();
        if NAME_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(FieldError::InvalidGroup(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-text note about a student. Every string is a valid remark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Remark(String);

impl Remark {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Letter grade, ordered from F (lowest) to A+ (highest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    F,
    D,
    DPlus,
    C,
    CPlus,
    BMinus,
    B,
    BPlus,
    AMinus,
    A,
    APlus,
}

impl Grade {
    /// Every grade in ascending order
    pub const ALL: [Grade; 11] = [
        Grade::F,
        Grade::D,
        Grade::DPlus,
        Grade::C,
        Grade::CPlus,
        Grade::BMinus,
        Grade::B,
        Grade::BPlus,
        Grade::AMinus,
        Grade::A,
        Grade::APlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::F => "F",
            Self::D => "D",
            Self::DPlus => "D+",
            Self::C => "C",
            Self::CPlus => "C+",
            Self::BMinus => "B-",
            Self::B => "B",
            Self::BPlus => "B+",
            Self::AMinus => "A-",
            Self::A => "A",
            Self::APlus => "A+",
        }
    }

    pub fn parse<S: AsRef<str>>(s: S) -> FieldResult<Self> {
        let normalized = s.as_ref().trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|grade| grade.as_str() == normalized)
            .ok_or_else(|| FieldError::InvalidGrade(s.as_ref().trim().to_string()))
    }
}

/// A student record
///
/// Identity is the StudentId. Two records with the same id but different
/// fields are different values of the same student, which is exactly the
/// situation an edit produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    name: Name,
    student_id: StudentId,
    email: Email,
    grade: Grade,
    #[serde(default)]
    groups: BTreeSet<Group>,
    #[serde(default)]
    remark: Remark,
}

impl Person {
    pub fn new(
        name: Name,
        student_id: StudentId,
        email: Email,
        grade: Grade,
        groups: BTreeSet<Group>,
        remark: Remark,
    ) -> Self {
        Self {
            name,
            student_id,
            email,
            grade,
            groups,
            remark,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn groups(&self) -> &BTreeSet<Group> {
        &self.groups
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Copy of this person carrying a different remark
    pub fn with_remark(&self, remark: Remark) -> Self {
        Self {
            remark,
            ..self.clone()
        }
    }

    /// Copy of this person with a different group set
    pub fn with_groups(&self, groups: BTreeSet<Group>) -> Self {
        Self {
            groups,
            ..self.clone()
        }
    }

    /// Weak students are those graded at or below the threshold
    pub fn is_weak(&self, threshold: Grade) -> bool {
        self.grade <= threshold
    }

    /// Same student, regardless of the other fields
    pub fn is_same_student(&self, other: &Person) -> bool {
        self.student_id == other.student_id
    }

    /// Display order for rosters: weakest grade first, then by student id
    pub fn display_order(a: &Person, b: &Person) -> Ordering {
        a.grade
            .cmp(&b.grade)
            .then_with(|| a.student_id.cmp(&b.student_id))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Student ID: {}; Email: {}; Grade: {}; Groups: ",
            self.name, self.student_id, self.email, self.grade
        )?;
        for group in &self.groups {
            write!(f, "[{}]", group)?;
        }
        if !self.remark.is_empty() {
            write!(f, "; Remark: {}", self.remark)?;
        }
        Ok(())
    }
}

// String conversions shared by the validated newtypes. Serde goes through
// TryFrom<String>, so malformed data files fail with the same messages the
// command parser produces.

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentId {
    type Err = FieldError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::parse(s)
    }
}

impl FromStr for Grade {
    type Err = FieldError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Name {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for StudentId {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Email {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Group {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Grade {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        Self::parse(value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl From<StudentId> for String {
    fn from(value: StudentId) -> Self {
        value.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl From<Group> for String {
    fn from(value: Group) -> Self {
        value.0
    }
}

impl From<Grade> for String {
    fn from(value: Grade) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Person {
        Person::new(
            Name::parse("Alice Pauline").unwrap(),
            StudentId::parse("A0000000A").unwrap(),
            Email::parse("alice@example.com").unwrap(),
            Grade::B,
            BTreeSet::from([Group::parse("Group 1").unwrap()]),
            Remark::default(),
        )
    }

    #[test]
    fn test_student_id_validation() {
        assert!(StudentId::parse("A0123456X").is_ok());
        assert_eq!(StudentId::parse(" a0123456x ").unwrap().as_str(), "A0123456X");

        assert!(StudentId::parse("").is_err());
        assert!(StudentId::parse("A012345X").is_err()); // six digits
        assert!(StudentId::parse("00123456X").is_err()); // leading digit
        assert!(StudentId::parse("A0123456").is_err()); // missing suffix
    }

    #[test]
    fn test_name_validation() {
        assert!(Name::parse("Alice Pauline").is_ok());
        assert!(Name::parse("R2D2").is_ok());
        assert!(Name::parse("").is_err());
        assert!(Name::parse("   ").is_err());
        assert!(Name::parse("Alice*").is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::parse("alice@example.com").is_ok());
        assert!(Email::parse("a.b-c_d+e@mail.example-site.org").is_ok());
        assert!(Email::parse("alice@ab").is_ok());

        assert!(Email::parse("alice").is_err());
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("alice@").is_err());
        assert!(Email::parse("-alice@example.com").is_err());
        assert!(Email::parse("alice@example.c").is_err()); // final label too short
        assert!(Email::parse("alice@-example.com").is_err());
    }

    #[test]
    fn test_grade_parsing_and_order() {
        assert_eq!(Grade::parse("a+").unwrap(), Grade::APlus);
        assert_eq!(Grade::parse("B-").unwrap(), Grade::BMinus);
        assert_eq!(Grade::parse(" c ").unwrap(), Grade::C);
        assert!(Grade::parse("E").is_err());
        assert!(Grade::parse("C-").is_err());

        assert!(Grade::F < Grade::D);
        assert!(Grade::CPlus < Grade::BMinus);
        assert!(Grade::A < Grade::APlus);

        for window in Grade::ALL.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_remark_accepts_anything() {
        assert!(Remark::new("").is_empty());
        assert_eq!(Remark::new("很好 👍").as_str(), "很好 👍");
    }

    #[test]
    fn test_weak_classification() {
        let person = alice();
        assert!(!person.is_weak(Grade::C));
        assert!(person.is_weak(Grade::B));
        assert!(person.is_weak(Grade::APlus));
    }

    #[test]
    fn test_with_remark_keeps_other_fields() {
        let person = alice();
        let remarked = person.with_remark(Remark::new("needs help with recursion"));

        assert_eq!(remarked.remark().as_str(), "needs help with recursion");
        assert_eq!(remarked.student_id(), person.student_id());
        assert_eq!(remarked.groups(), person.groups());
        assert!(remarked.is_same_student(&person));
        assert_ne!(remarked, person);
    }

    #[test]
    fn test_display_order() {
        let strong = alice();
        let weak = Person::new(
            Name::parse("Benson Meier").unwrap(),
            StudentId::parse("A0000001B").unwrap(),
            Email::parse("benson@example.com").unwrap(),
            Grade::D,
            BTreeSet::new(),
            Remark::default(),
        );

        assert_eq!(Person::display_order(&weak, &strong), Ordering::Less);
        assert_eq!(Person::display_order(&strong, &strong), Ordering::Equal);
    }

    #[test]
    fn test_serde_rejects_invalid_fields() {
        let json = serde_json::to_string(&alice()).unwrap();
        assert!(json.contains("\"studentId\":\"A0000000A\""));
        assert!(json.contains("\"grade\":\"B\""));

        let parsed: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, alice());

        let bad = json.replace("A0000000A", "not-an-id");
        assert!(serde_json::from_str::<Person>(&bad).is_err());
    }

    #[test]
    fn test_display_format() {
        let text = alice().with_remark(Remark::new("quiet")).to_string();
        assert_eq!(
            text,
            "Alice Pauline; Student ID: A0000000A; Email: alice@example.com; Grade: B; Groups: [Group 1]; Remark: quiet"
        );
    }
}
