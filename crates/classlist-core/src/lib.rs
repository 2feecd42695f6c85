// crates/classlist-core/src/lib.rs - Core library for class list management
//
// The core owns everything except the terminal: validated student records,
// the two rosters and their filtered views, the command language, JSON
// persistence and configuration. Front ends talk to `Logic`.
//
// LAYERING (each layer only uses the ones above it):
// - person, roster, filter: values and collections, no I/O
// - model: both rosters plus views, archive/unarchive transfers
// - commands, parser: the command language over the Model
// - storage, config: files on disk
// - logic: parse -> execute -> save

pub mod commands;
pub mod config;
pub mod filter;
pub mod logic;
pub mod model;
pub mod parser;
pub mod person;
pub mod roster;
pub mod storage;

pub use commands::{Attachment, Command, CommandError, CommandResult, Listing};
pub use config::{ClasslistConfig, ConfigError, ConfigManager};
pub use filter::PersonFilter;
pub use logic::{Logic, LogicError, LogicResult};
pub use model::{GradeDistribution, Model, ModelConfig};
pub use parser::{ParseError, parse_command};
pub use person::{Email, Grade, Group, Name, Person, Remark, StudentId};
pub use roster::Roster;
pub use storage::{JsonStorage, Storage, StorageError};
