// crates/classlist-cli/src/stdin.rs - Centralized STDIN handling utility
//
// Read from stdin when no positional args are provided, following the usual
// Unix convention.

use anyhow::Result;
use std::io::{self, IsTerminal, Read};

/// Use the argument when given, otherwise read piped stdin
///
/// ```bash
/// classlist exec find alice
/// echo "find alice" | classlist exec
/// ```
pub fn read_input_or_stdin(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(value) => Ok(value.to_string()),
        None => {
            if io::stdin().is_terminal() {
                return Err(anyhow::anyhow!(
                    "No input provided. Either provide a command or pipe one in.\n\nExamples:\n  classlist exec list\n  echo \"list\" | classlist exec"
                ));
            }

            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;

            let input = buffer.trim().to_string();
            if input.is_empty() {
                return Err(anyhow::anyhow!("Empty input provided"));
            }

            Ok(input)
        }
    }
}

/// Non-empty trimmed lines of piped stdin, for batch runs
///
/// ```bash
/// classlist shell < commands.txt
/// ```
pub fn read_lines_from_stdin() -> Result<Vec<String>> {
    if io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "No piped input detected. This command expects input from stdin."
        ));
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(non_empty_lines(&buffer))
}

fn non_empty_lines(buffer: &str) -> Vec<String> {
    buffer
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
