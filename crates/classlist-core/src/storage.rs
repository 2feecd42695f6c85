// crates/classlist-core/src/storage.rs - Roster persistence
//
// Each roster lives in its own JSON file shaped as {"persons": [...]}.
// A missing file means "nothing saved yet" and reads as None; the caller
// decides what an empty start looks like. Loading re-validates every field
// and rejects duplicate ids or emails, within a file and across the two
// files, so a hand-edited file cannot smuggle an invalid roster into the
// Model.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::person::{Person, StudentId};
use crate::roster::{Roster, RosterError};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a valid roster file: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} contains an invalid roster: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: RosterError,
    },

    #[error(
        "Student {id} in {} shares its {field} with the active roster",
        .archive.display()
    )]
    CrossRosterDuplicate {
        id: StudentId,
        field: &'static str,
        archive: PathBuf,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Somewhere the two rosters can be loaded from and saved to
pub trait Storage {
    fn roster_path(&self) -> &Path;
    fn archive_path(&self) -> &Path;

    /// None when nothing has been saved yet
    fn read_roster(&self) -> StorageResult<Option<Roster>>;
    fn read_archived(&self) -> StorageResult<Option<Roster>>;

    fn save_roster(&self, roster: &Roster) -> StorageResult<()>;
    fn save_archived(&self, roster: &Roster) -> StorageResult<()>;

    /// Both rosters, empty when missing, with no id or email in both
    fn read_all(&self) -> StorageResult<(Roster, Roster)> {
        let roster = self.read_roster()?.unwrap_or_default();
        let archived = self.read_archived()?.unwrap_or_default();

        for person in &archived {
            let field = if roster.has_id(person.student_id()) {
                "ID"
            } else if roster.has_email(person.email()) {
                "email"
            } else {
                continue;
            };
            return Err(StorageError::CrossRosterDuplicate {
                id: person.student_id().clone(),
                field,
                archive: self.archive_path().to_path_buf(),
            });
        }
        Ok((roster, archived))
    }
}

/// On-disk shape of a roster file
#[derive(Debug, Serialize, Deserialize)]
struct RosterFile {
    #[serde(default)]
    persons: Vec<Person>,
}

/// Pretty-printed JSON files on the local filesystem
#[derive(Debug, Clone)]
pub struct JsonStorage {
    roster_path: PathBuf,
    archive_path: PathBuf,
}

impl JsonStorage {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(roster_path: P, archive_path: Q) -> Self {
        Self {
            roster_path: roster_path.into(),
            archive_path: archive_path.into(),
        }
    }

    /// Resolve the configured file names against a data directory
    pub fn from_config(data_dir: &Path, config: &StorageConfig) -> Self {
        Self::new(
            data_dir.join(&config.roster_file),
            data_dir.join(&config.archive_file),
        )
    }

    fn read(path: &Path) -> StorageResult<Option<Roster>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "roster file not found");
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let file: RosterFile =
            serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        let roster = Roster::from_persons(file.persons).map_err(|source| StorageError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), count = roster.len(), "read roster");
        Ok(Some(roster))
    }

    fn write(path: &Path, roster: &Roster) -> StorageResult<()> {
        let io_error = |source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let file = RosterFile {
            persons: roster.persons().to_vec(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_error)?;

        info!(path = %path.display(), count = roster.len(), "saved roster");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn roster_path(&self) -> &Path {
        &self.roster_path
    }

    fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    fn read_roster(&self) -> StorageResult<Option<Roster>> {
        Self::read(&self.roster_path)
    }

    fn read_archived(&self) -> StorageResult<Option<Roster>> {
        Self::read(&self.archive_path)
    }

    fn save_roster(&self, roster: &Roster) -> StorageResult<()> {
        Self::write(&self.roster_path, roster)
    }

    fn save_archived(&self, roster: &Roster) -> StorageResult<()> {
        Self::write(&self.archive_path, roster)
    }
}
