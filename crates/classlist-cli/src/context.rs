// crates/classlist-cli/src/context.rs - Application context
//
// Resolves the data directory, loads configuration and hands command
// handlers the services they need. Nothing global.

use anyhow::{Context as AnyhowContext, Result};
use std::env;
use std::path::{Path, PathBuf};

use classlist_core::Logic;
use classlist_core::config::{ClasslistConfig, ConfigManager};
use classlist_core::storage::JsonStorage;

use crate::services::{ColorChoice, DataDirService, Renderer};

/// Directory used when neither --data-dir nor CLASSLIST_DATA_DIR is set
pub const DEFAULT_DATA_DIR: &str = "data";

/// Application context passed to command handlers
pub struct Context {
    pub data_dir_service: DataDirService,
    pub renderer: Renderer,
    config: ClasslistConfig,
}

impl Context {
    /// Build the context for a data directory
    ///
    /// clap has already folded CLASSLIST_DATA_DIR into `data_dir`.
    pub fn new(data_dir: Option<PathBuf>, no_color: bool) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir)?;
        let config = ConfigManager::load_config(Some(&data_dir))
            .with_context(|| format!("Failed to load configuration from {}", data_dir.display()))?;

        let renderer = Renderer::new(
            ColorChoice::resolve(&config.output.color, no_color),
            config.roster.weak_threshold,
        );

        Ok(Self {
            data_dir_service: DataDirService::new(data_dir),
            renderer,
            config,
        })
    }

    /// Load both rosters into a ready-to-use Logic
    pub fn load_logic(&self) -> Result<Logic<JsonStorage>> {
        let storage = self.data_dir_service.storage(&self.config.storage);
        Logic::load(storage, self.config.roster.model_config()).with_context(|| {
            format!(
                "Failed to load rosters from {}",
                self.data_dir().display()
            )
        })
    }

    pub fn config(&self) -> &ClasslistConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir_service.data_dir()
    }
}

/// Precedence: explicit path (flag or environment) > ./data
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    match data_dir {
        Some(path) => Ok(path),
        None => {
            let cwd = env::current_dir().context("Failed to read the current directory")?;
            Ok(cwd.join(DEFAULT_DATA_DIR))
        }
    }
}
