// crates/classlist-cli/src/commands/shell.rs - Command loop
//
// Interactive when stdin is a terminal: prompt, run, print, repeat until
// `exit` or end of input. With piped stdin every line is run in order and
// the process fails at the end if any line failed, which makes the shell
// usable from scripts.

use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

use classlist_core::Logic;
use classlist_core::storage::Storage;

use crate::commands::listed_persons;
use crate::context::Context;
use crate::services::Renderer;
use crate::stdin::read_lines_from_stdin;

/// Whether the loop should keep going after a line
enum Flow {
    Continue,
    Exit,
}

pub fn handle(ctx: &Context) -> Result<()> {
    let mut logic = ctx.load_logic()?;

    if io::stdin().is_terminal() {
        interactive(&mut logic, &ctx.renderer)
    } else {
        batch(&mut logic, &ctx.renderer, read_lines_from_stdin()?)
    }
}

fn interactive<S: Storage>(logic: &mut Logic<S>, renderer: &Renderer) -> Result<()> {
    println!("{} students loaded. Type `help` for commands.", logic.roster().len());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        if let (Flow::Exit, _) = run_line(logic, renderer, &line) {
            break;
        }
    }
    Ok(())
}

fn batch<S: Storage>(logic: &mut Logic<S>, renderer: &Renderer, lines: Vec<String>) -> Result<()> {
    let mut failures = 0;
    for line in &lines {
        let (flow, ok) = run_line(logic, renderer, line);
        if !ok {
            failures += 1;
        }
        if let Flow::Exit = flow {
            break;
        }
    }

    debug!(lines = lines.len(), failures, "batch finished");
    if failures > 0 {
        bail!("{failures} command(s) failed");
    }
    Ok(())
}

/// Run a line and print the outcome; returns the flow and whether it succeeded
fn run_line<S: Storage>(logic: &mut Logic<S>, renderer: &Renderer, line: &str) -> (Flow, bool) {
    match logic.execute(line) {
        Ok(result) => {
            renderer.print_result(&result, &listed_persons(logic, &result));
            let flow = if result.exit { Flow::Exit } else { Flow::Continue };
            (flow, true)
        }
        Err(error) => {
            renderer.print_error(&error.to_string());
            (Flow::Continue, false)
        }
    }
}
