// crates/classlist-cli/src/main.rs - CLI Application Entry Point
//
// The binary is a thin front end over classlist-core's Logic: it resolves
// the data directory, loads config, sets up logging and color, then hands
// off to one handler per subcommand.
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │  classlist-core     │
//                        │ (dir + config)   │    │  Logic / Storage    │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// classlist init                                         # ./data with config.toml
// classlist exec add n/Alice Tan id/A0123456X e/alice@example.com gr/B+
// classlist exec group g/Group 1 id/A0123456X
// classlist list --json | jq '.[] | .studentId'
// printf 'weak\nsummary\n' | classlist shell
// ```

use anyhow::Result;
use clap::Parser;

// Module declarations - each module handles a specific concern
mod cli; // Command-line interface definitions (pure data structures)
mod commands; // Subcommand handlers
mod context; // Data directory, config and services
mod logging; // tracing subscriber setup
mod services; // Data directory operations and terminal rendering
mod stdin; // Stdin functions for command inputs

use cli::{Cli, Commands};
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // init may run before any data directory or config exists
    if let Commands::Init { path } = &cli.command {
        logging::init("warn", cli.verbose);
        return commands::init::handle(path.clone(), cli.data_dir.clone());
    }

    #[cfg(feature = "completions")]
    if let Commands::Completions { shell } = &cli.command {
        return commands::completions::handle(*shell);
    }

    let ctx = Context::new(cli.data_dir, cli.no_color)?;
    logging::init(&ctx.config().logging.level, cli.verbose);

    match cli.command {
        Commands::Shell => commands::shell::handle(&ctx),
        Commands::Exec { command } => commands::exec::handle(&ctx, command),
        Commands::List { archived, json } => commands::list::handle(&ctx, archived, json),
        Commands::Init { .. } => unreachable!(), // Already handled above
        #[cfg(feature = "completions")]
        Commands::Completions { .. } => unreachable!(), // Already handled above
    }
}
