// crates/classlist-core/src/config.rs - Configuration System
//
// Configuration schema and loading for the class list tool.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--verbose, --no-color)
// 2. Environment variables (CLASSLIST_WEAK_THRESHOLD, CLASSLIST_LOG)
// 3. Data directory config file (<data_dir>/config.toml)
// 4. Built-in defaults
//
// The data directory itself is resolved by the caller before any of this
// runs, since the config file lives inside it.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::filter::PersonFilter;
use crate::model::ModelConfig;
use crate::person::Grade;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const ENV_WEAK_THRESHOLD: &str = "CLASSLIST_WEAK_THRESHOLD";
pub const ENV_LOG: &str = "CLASSLIST_LOG";

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
///
/// Every section has defaults, so a partial (or absent) config file is fine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClasslistConfig {
    /// Where the rosters are kept inside the data directory
    #[serde(default)]
    pub storage: StorageConfig,

    /// Model behavior
    #[serde(default)]
    pub roster: RosterConfig,

    /// Terminal output
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// File names of the two roster files, relative to the data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_roster_file")]
    pub roster_file: String,

    #[serde(default = "default_archive_file")]
    pub archive_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Students graded at or below this are weak
    #[serde(default = "default_weak_threshold")]
    pub weak_threshold: Grade,

    /// Filter applied to the active view on startup
    #[serde(default)]
    pub starting_filter: PersonFilter,
}

impl RosterConfig {
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            starting_filter: self.starting_filter.clone(),
            weak_threshold: self.weak_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Color output: "auto", "always", "never"
    #[serde(default = "default_color")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of "error", "warn", "info", "debug", "trace"
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration for a data directory
    ///
    /// LOADING STRATEGY:
    /// 1. Start with built-in defaults
    /// 2. Replace with <data_dir>/config.toml (if it exists)
    /// 3. Override with environment variables
    /// 4. Validate
    ///
    /// A missing config file is not an error. Bad TOML or bad values are.
    pub fn load_config(data_dir: Option<&Path>) -> ConfigResult<ClasslistConfig> {
        Self::load_config_with_env(data_dir, |key| env::var(key).ok())
    }

    /// Same as `load_config`, reading environment values through `lookup`
    pub fn load_config_with_env<F>(
        data_dir: Option<&Path>,
        lookup: F,
    ) -> ConfigResult<ClasslistConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClasslistConfig::default();

        if let Some(data_dir) = data_dir
            && let Some(file_config) = Self::try_load_data_dir_config(data_dir)?
        {
            config = file_config;
        }

        Self::apply_env_overrides(&mut config, lookup)?;
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Generate the commented config file written by `init`
    pub fn generate_default_config() -> String {
        r#"# Class list configuration
#
# Lines starting with # are comments and are ignored.

[storage]
# Roster files, relative to the data directory
roster_file = "roster.json"
archive_file = "archived.json"

[roster]
# Students graded at or below this grade are listed by `weak`
# (overridden by CLASSLIST_WEAK_THRESHOLD)
weak_threshold = "C"

# Filter applied to the active list on startup, for example
# starting_filter = { kind = "groups", values = ["Group 1"] }
starting_filter = { kind = "all" }

[output]
# Color output: "auto", "always", "never"
color = "auto"

[logging]
# Log level written to stderr: "error", "warn", "info", "debug", "trace"
# (overridden by CLASSLIST_LOG and --verbose)
level = "warn"
"#
        .to_string()
    }

    fn try_load_data_dir_config(data_dir: &Path) -> ConfigResult<Option<ClasslistConfig>> {
        let config_path = data_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(None);
        }

        let config_content = std::fs::read_to_string(&config_path)?;

        let config: ClasslistConfig =
            toml::from_str(&config_content).map_err(|e| ConfigError::ParseError {
                file: config_path.display().to_string(),
                error: e.to_string(),
            })?;

        debug!(path = %config_path.display(), "loaded config file");
        Ok(Some(config))
    }

    /// Apply environment variable overrides
    ///
    /// - CLASSLIST_WEAK_THRESHOLD -> roster.weak_threshold
    /// - CLASSLIST_LOG -> logging.level
    fn apply_env_overrides<F>(config: &mut ClasslistConfig, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(threshold) = lookup(ENV_WEAK_THRESHOLD) {
            config.roster.weak_threshold = Grade::parse(&threshold).map_err(|e| {
                ConfigError::ValidationError(format!("{ENV_WEAK_THRESHOLD}: {e}"))
            })?;
        }

        if let Some(level) = lookup(ENV_LOG) {
            config.logging.level = level.trim().to_ascii_lowercase();
        }

        Ok(())
    }

    /// Validate the final configuration for consistency and correctness
    pub fn validate_config(config: &ClasslistConfig) -> ConfigResult<()> {
        let storage = &config.storage;
        if storage.roster_file.trim().is_empty() || storage.archive_file.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Roster file names cannot be empty".to_string(),
            ));
        }
        if storage.roster_file == storage.archive_file {
            return Err(ConfigError::ValidationError(format!(
                "roster_file and archive_file must differ (both are '{}')",
                storage.roster_file
            )));
        }

        match config.output.color.as_str() {
            "auto" | "always" | "never" => {}
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid color '{}'. Must be one of: auto, always, never",
                    config.output.color
                )));
            }
        }

        match config.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level '{}'. Must be one of: error, warn, info, debug, trace",
                    config.logging.level
                )));
            }
        }

        Ok(())
    }
}

fn default_roster_file() -> String {
    "roster.json".to_string()
}
fn default_archive_file() -> String {
    "archived.json".to_string()
}

fn default_weak_threshold() -> Grade {
    Grade::C
}

fn default_color() -> String {
    "auto".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            roster_file: default_roster_file(),
            archive_file: default_archive_file(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            weak_threshold: default_weak_threshold(),
            starting_filter: PersonFilter::All,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
