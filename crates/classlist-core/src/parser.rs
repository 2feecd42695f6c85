// crates/classlist-core/src/parser.rs - Text command parsing
//
// A command line is a command word followed by arguments. Arguments are a
// free-form preamble and then prefixed values such as `n/Alice id/A0123456X`.
//
// PREFIX RULES:
// - A prefix is only recognized at the start of the arguments or right after
//   whitespace, so an email like `alice@n/x` is never split.
// - A value runs until the next recognized prefix and is trimmed.
// - Single-valued prefixes may appear at most once.
// - A remark is everything after its first `r/`, later `r/` included.
//
// Parsing never touches the Model.

use indexmap::IndexSet;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::commands::{
    AddCommand, ArchiveCommand, Command, DeleteCommand, EditCommand, EditPersonDescriptor,
    FindCommand, GroupCommand, Index, RemarkCommand, UnarchiveCommand, view,
};
use crate::person::{Email, FieldError, Grade, Group, Name, Person, Remark, StudentId};

/// Errors raised while turning text into a Command
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefixes(String),

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    #[error("Index is not a non-zero unsigned integer: {0}")]
    InvalidIndex(String),
}

/// Result type for parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Argument prefixes understood by the command language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Name,
    StudentId,
    Email,
    Grade,
    Group,
    Remark,
}

impl Prefix {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Name => "n/",
            Self::StudentId => "id/",
            Self::Email => "e/",
            Self::Grade => "gr/",
            Self::Group => "g/",
            Self::Remark => "r/",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Tokenized arguments: the preamble plus every value seen for each prefix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for the prefix
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for the prefix, in input order
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    pub fn has(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails when any of the given prefixes appears more than once
    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(|prefix| prefix.to_string())
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated.join(" ")))
        }
    }
}

/// Byte offsets where one of the prefixes starts at a word boundary
fn prefix_marks(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut marks = Vec::new();
    let mut at_boundary = true;
    for (pos, ch) in args.char_indices() {
        if at_boundary
            && let Some(prefix) = prefixes
                .iter()
                .find(|prefix| args[pos..].starts_with(prefix.token()))
        {
            marks.push((pos, *prefix));
        }
        at_boundary = ch.is_whitespace();
    }
    marks
}

/// Split raw arguments on the given prefixes
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let marks = prefix_marks(args, prefixes);

    let preamble_end = marks.first().map_or(args.len(), |(pos, _)| *pos);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };
    for (i, (pos, prefix)) in marks.iter().enumerate() {
        let start = pos + prefix.token().len();
        let end = marks.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }
    map
}

/// Parse one line of user input
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let input = input.trim();
    let (word, args) = match input.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (input, ""),
    };
    if word.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: view::HELP_USAGE,
        });
    }
    debug!(word, "parsing command");

    let command = match word {
        AddCommand::COMMAND_WORD => Command::Add(parse_add(args)?),
        EditCommand::COMMAND_WORD => Command::Edit(parse_edit(args)?),
        DeleteCommand::COMMAND_WORD => {
            Command::Delete(DeleteCommand::new(parse_lone_id(args, DeleteCommand::USAGE)?))
        }
        GroupCommand::COMMAND_WORD => Command::Group(parse_group(args)?),
        ArchiveCommand::COMMAND_WORD => {
            Command::Archive(ArchiveCommand::new(parse_lone_id(args, ArchiveCommand::USAGE)?))
        }
        UnarchiveCommand::COMMAND_WORD => Command::Unarchive(UnarchiveCommand::new(
            parse_lone_id(args, UnarchiveCommand::USAGE)?,
        )),
        RemarkCommand::COMMAND_WORD => Command::Remark(parse_remark(args)?),
        FindCommand::COMMAND_WORD => Command::Find(parse_find(args)?),
        view::LIST_WORD => Command::List,
        view::ARCHIVED_WORD => Command::ListArchived,
        view::WEAK_WORD => Command::Weak,
        view::SUMMARY_WORD => Command::Summary,
        view::CLEAR_WORD => Command::Clear,
        view::HELP_WORD => Command::Help,
        view::EXIT_WORD => Command::Exit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

const ADD_PREFIXES: [Prefix; 5] = [
    Prefix::Name,
    Prefix::StudentId,
    Prefix::Email,
    Prefix::Grade,
    Prefix::Group,
];

const SINGLE_VALUED: [Prefix; 4] = [
    Prefix::Name,
    Prefix::StudentId,
    Prefix::Email,
    Prefix::Grade,
];

fn parse_add(args: &str) -> ParseResult<AddCommand> {
    let map = tokenize(args, &ADD_PREFIXES);
    let usage = AddCommand::USAGE;
    if !map.preamble().is_empty() || !SINGLE_VALUED.iter().all(|prefix| map.has(*prefix)) {
        return Err(ParseError::InvalidFormat { usage });
    }
    map.verify_no_duplicates(&SINGLE_VALUED)?;

    let required = |prefix| map.value(prefix).ok_or(ParseError::InvalidFormat { usage });
    let person = Person::new(
        Name::parse(required(Prefix::Name)?)?,
        StudentId::parse(required(Prefix::StudentId)?)?,
        Email::parse(required(Prefix::Email)?)?,
        Grade::parse(required(Prefix::Grade)?)?,
        parse_groups(map.all_values(Prefix::Group))?,
        Remark::default(),
    );
    Ok(AddCommand::new(person))
}

fn parse_edit(args: &str) -> ParseResult<EditCommand> {
    let map = tokenize(args, &ADD_PREFIXES);
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: EditCommand::USAGE,
        });
    }
    let student_id = StudentId::parse(map.preamble())?;
    map.verify_no_duplicates(&SINGLE_VALUED)?;

    let descriptor = EditPersonDescriptor {
        name: map.value(Prefix::Name).map(Name::parse).transpose()?,
        student_id: map
            .value(Prefix::StudentId)
            .map(StudentId::parse)
            .transpose()?,
        email: map.value(Prefix::Email).map(Email::parse).transpose()?,
        grade: map.value(Prefix::Grade).map(Grade::parse).transpose()?,
        groups: parse_groups_for_edit(map.all_values(Prefix::Group))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(EditCommand::new(student_id, descriptor))
}

fn parse_group(args: &str) -> ParseResult<GroupCommand> {
    let map = tokenize(args, &[Prefix::Group, Prefix::StudentId]);
    let usage = GroupCommand::USAGE;
    if !map.preamble().is_empty() || !map.has(Prefix::Group) || !map.has(Prefix::StudentId) {
        return Err(ParseError::InvalidFormat { usage });
    }
    map.verify_no_duplicates(&[Prefix::Group])?;

    let group = Group::parse(map.value(Prefix::Group).unwrap_or_default())?;
    let student_ids = map
        .all_values(Prefix::StudentId)
        .iter()
        .map(StudentId::parse)
        .collect::<Result<IndexSet<_>, _>>()?;
    Ok(GroupCommand::new(group, student_ids))
}

fn parse_remark(args: &str) -> ParseResult<RemarkCommand> {
    let usage = RemarkCommand::USAGE;
    let Some(&(pos, prefix)) = prefix_marks(args, &[Prefix::Remark]).first() else {
        return Err(ParseError::InvalidFormat { usage });
    };
    let preamble = args[..pos].trim();
    if preamble.is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }
    let index = parse_index(preamble)?;
    let remark = Remark::new(args[pos + prefix.token().len()..].trim());
    Ok(RemarkCommand::new(index, remark))
}

fn parse_find(args: &str) -> ParseResult<FindCommand> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: FindCommand::USAGE,
        });
    }
    Ok(FindCommand::new(keywords))
}

fn parse_lone_id(args: &str, usage: &'static str) -> ParseResult<StudentId> {
    let args = args.trim();
    if args.is_empty() || args.contains(char::is_whitespace) {
        return Err(ParseError::InvalidFormat { usage });
    }
    Ok(StudentId::parse(args)?)
}

/// Parse a one-based index such as `3`
pub fn parse_index(raw: &str) -> ParseResult<Index> {
    let raw = raw.trim();
    raw.parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::InvalidIndex(raw.to_string()))
}

fn parse_groups(values: &[String]) -> ParseResult<BTreeSet<Group>> {
    Ok(values.iter().map(Group::parse).collect::<Result<_, _>>()?)
}

/// A lone empty `g/` clears all groups
fn parse_groups_for_edit(values: &[String]) -> ParseResult<Option<BTreeSet<Group>>> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        values => parse_groups(values).map(Some),
    }
}
