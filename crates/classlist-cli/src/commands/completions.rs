// crates/classlist-cli/src/commands/completions.rs - Shell completion scripts
//
// ```bash
// classlist completions bash > ~/.local/share/bash-completion/completions/classlist
// ```

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use crate::cli::Cli;

pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
