// crates/classlist-cli/src/services/data_dir.rs - Data directory operations
//
// Knows where things live inside a data directory and how to create one.
// Reading and writing the rosters themselves is the core's JsonStorage; this
// service only deals with the directory and its config file.
//
// LAYOUT:
// ```
// data/
// ├── config.toml
// ├── roster.json     (created on first save)
// └── archived.json   (created on first save)
// ```

use anyhow::{Context as AnyhowContext, Result};
use std::fs;
use std::path::{Path, PathBuf};

use classlist_core::config::{CONFIG_FILE_NAME, ConfigManager, StorageConfig};
use classlist_core::storage::JsonStorage;

/// What `init` did to the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyConfigured,
}

pub struct DataDirService {
    data_dir: PathBuf,
}

impl DataDirService {
    /// Construction does not touch the filesystem, so `init` can use it
    /// before the directory exists
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    /// Roster storage for the configured file names
    pub fn storage(&self, config: &StorageConfig) -> JsonStorage {
        JsonStorage::from_config(&self.data_dir, config)
    }

    /// Create the directory and a commented config.toml
    ///
    /// An existing config.toml is left untouched.
    pub fn init(&self) -> Result<InitOutcome> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                self.data_dir.display()
            )
        })?;

        let config_path = self.config_path();
        if config_path.exists() {
            return Ok(InitOutcome::AlreadyConfigured);
        }

        fs::write(&config_path, ConfigManager::generate_default_config())
            .with_context(|| format!("Failed to create {}", config_path.display()))?;

        Ok(InitOutcome::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classlist_core::storage::Storage;

    #[test]
    fn test_init_creates_config_once() {
        let temp = tempfile::tempdir().unwrap();
        let service = DataDirService::new(temp.path().join("class"));

        assert_eq!(service.init().unwrap(), InitOutcome::Created);
        assert!(service.config_path().exists());

        fs::write(service.config_path(), "[output]\ncolor = \"never\"\n").unwrap();
        assert_eq!(service.init().unwrap(), InitOutcome::AlreadyConfigured);
        let kept = fs::read_to_string(service.config_path()).unwrap();
        assert!(kept.contains("never"));
    }

    #[test]
    fn test_storage_paths() {
        let service = DataDirService::new(PathBuf::from("/tmp/class"));
        let storage = service.storage(&StorageConfig::default());
        assert_eq!(storage.roster_path(), Path::new("/tmp/class/roster.json"));
        assert_eq!(storage.archive_path(), Path::new("/tmp/class/archived.json"));
    }
}
