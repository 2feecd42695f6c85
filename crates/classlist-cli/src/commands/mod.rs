// crates/classlist-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per subcommand.
//
// MODULE ORGANIZATION:
// - init: data directory creation (special case, no context needed)
// - shell: interactive or batch loop over the command language
// - exec: one command line
// - list: print a roster, human or JSON
// - completions: shell completion scripts

#[cfg(feature = "completions")]
pub mod completions;
pub mod exec;
pub mod init;
pub mod list;
pub mod shell;

use classlist_core::commands::{CommandResult, Listing};
use classlist_core::storage::Storage;
use classlist_core::{Logic, Person};

/// The people a result wants shown, taken from the matching view
pub(crate) fn listed_persons<'a, S: Storage>(
    logic: &'a Logic<S>,
    result: &CommandResult,
) -> Vec<&'a Person> {
    match result.listing {
        Some(Listing::Active) => logic.filtered_persons(),
        Some(Listing::Archived) => logic.filtered_archived_persons(),
        None => Vec::new(),
    }
}
