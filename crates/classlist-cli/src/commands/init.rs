// crates/classlist-cli/src/commands/init.rs - Data directory initialization
//
// Runs before a Context exists, since there may be no data directory (and
// so no config) yet. Never overwrites an existing config.toml.

use anyhow::Result;
use std::path::PathBuf;

use crate::context::resolve_data_dir;
use crate::services::{DataDirService, InitOutcome};

/// ```bash
/// classlist init                 # ./data
/// classlist init ~/cs2103-t12    # explicit location
/// ```
pub fn handle(path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<()> {
    let target = resolve_data_dir(path.or(data_dir))?;

    let service = DataDirService::new(target);
    match service.init()? {
        InitOutcome::Created => {
            println!("Initialized class list at: {}", service.data_dir().display());
            println!("Created {}", service.config_path().display());
        }
        InitOutcome::AlreadyConfigured => {
            println!(
                "Class list already initialized at: {}",
                service.data_dir().display()
            );
        }
    }

    println!();
    println!("Next steps:");
    println!("   classlist exec add n/Alice Tan id/A0123456X e/alice@example.com gr/B+");
    println!("   classlist list");
    println!("   classlist shell");

    Ok(())
}
