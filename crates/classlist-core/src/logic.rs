// crates/classlist-core/src/logic.rs - Parse, execute, persist
//
// Logic is the single entry point a front end talks to. It owns the Model and
// a Storage, turns a line of text into a Command, executes it, and saves both
// rosters after every command that can change them.
//
// Saving happens even when a mutating command fails, because a GroupCommand
// can apply some edits before reporting the ids it could not find.

use thiserror::Error;
use tracing::debug;

use crate::commands::{CommandError, CommandResult};
use crate::model::{Model, ModelConfig};
use crate::parser::{self, ParseError};
use crate::person::Person;
use crate::roster::Roster;
use crate::storage::{Storage, StorageError};

#[derive(Error, Debug)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Could not load data: {0}")]
    Load(#[source] StorageError),

    #[error("Could not save data: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for Logic operations
pub type LogicResult<T> = Result<T, LogicError>;

pub struct Logic<S: Storage> {
    model: Model,
    storage: S,
}

impl<S: Storage> Logic<S> {
    /// Read both rosters from storage; missing files start empty
    pub fn load(storage: S, config: ModelConfig) -> LogicResult<Self> {
        let (roster, archived) = storage.read_all().map_err(LogicError::Load)?;
        let model = Model::new(roster, archived, config);
        Ok(Self { model, storage })
    }

    /// Wrap an existing model without reading storage
    pub fn with_model(storage: S, model: Model) -> Self {
        Self { model, storage }
    }

    /// Parse and run one line of user input
    pub fn execute(&mut self, input: &str) -> LogicResult<CommandResult> {
        let command = parser::parse_command(input)?;
        debug!(command = command.word(), "executing");

        let outcome = command.execute(&mut self.model);
        if command.is_mutating() {
            self.save()?;
        }

        match outcome {
            Ok(result) => Ok(result),
            Err(error) => {
                debug!(command = command.word(), %error, "command failed");
                Err(error.into())
            }
        }
    }

    /// Write both rosters
    pub fn save(&self) -> LogicResult<()> {
        self.storage.save_roster(self.model.roster())?;
        self.storage.save_archived(self.model.archived_roster())?;
        Ok(())
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.model.filtered_persons()
    }

    pub fn filtered_archived_persons(&self) -> Vec<&Person> {
        self.model.filtered_archived_persons()
    }

    pub fn roster(&self) -> &Roster {
        self.model.roster()
    }
}
