// crates/classlist-cli/src/cli.rs - Command-line interface definitions
//
// Pure data: what the binary accepts. Behavior lives in commands/.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "classlist")]
#[command(about = "Keep track of the students in your class from the terminal")]
#[command(version)]
pub struct Cli {
    /// Data directory holding the rosters and config.toml
    #[arg(short, long, global = true, env = "CLASSLIST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a data directory with a default config.toml
    Init {
        /// Directory to initialize (defaults to the data directory)
        path: Option<PathBuf>,
    },

    /// Run commands interactively, or one per line from piped stdin
    Shell,

    /// Run a single command, e.g. `classlist exec find alice`
    Exec {
        /// Command line to run; read from stdin when omitted
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Print a roster
    List {
        /// Show the archived roster instead of the active one
        #[arg(long)]
        archived: bool,

        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions
    #[cfg(feature = "completions")]
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
