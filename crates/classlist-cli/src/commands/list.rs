// crates/classlist-cli/src/commands/list.rs - Print a roster
//
// Always the full roster in display order (weakest grade first); the
// filters of the command language do not persist between runs.

use anyhow::Result;

use crate::context::Context;

/// Human-readable by default, a JSON array of persons with `--json`
pub fn handle(ctx: &Context, archived: bool, json: bool) -> Result<()> {
    let logic = ctx.load_logic()?;
    let roster = if archived {
        logic.model().archived_roster()
    } else {
        logic.roster()
    };
    let persons: Vec<_> = roster.iter().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&persons)?);
    } else {
        println!("{}", ctx.renderer.person_list(&persons));
    }

    Ok(())
}
