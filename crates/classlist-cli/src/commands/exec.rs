// crates/classlist-cli/src/commands/exec.rs - Run one command line
//
// Words after `exec` are joined back into a single line, so quoting is
// optional: `classlist exec find alice bob` == `classlist exec "find alice bob"`.
// A failed command is an error exit.

use anyhow::Result;

use crate::commands::listed_persons;
use crate::context::Context;
use crate::stdin::read_input_or_stdin;

pub fn handle(ctx: &Context, words: Vec<String>) -> Result<()> {
    let joined = (!words.is_empty()).then(|| words.join(" "));
    let line = read_input_or_stdin(joined.as_deref())?;

    let mut logic = ctx.load_logic()?;
    let result = logic.execute(&line)?;

    ctx.renderer
        .print_result(&result, &listed_persons(&logic, &result));
    Ok(())
}
