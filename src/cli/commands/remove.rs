//! `passlock remove` — delete an entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PassLockError, Result};

/// Execute the `remove` command.
pub fn execute(cli: &Cli, index: usize, force: bool) -> Result<()> {
    let mut store = open_vault(cli)?;
    let title = store.record(index)?.title.clone();

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete '{title}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassLockError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    store.remove_record(index)?;
    store.save()?;

    output::success(&format!("Deleted entry '{title}'"));
    Ok(())
}
