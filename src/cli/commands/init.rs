//! `passlock init` — create a new vault file.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{prompt_new_passphrase, Cli};
use crate::errors::{PassLockError, Result};
use crate::vault::VaultStore;

/// Execute the `init` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    // 1. An existing vault is only overwritten after explicit confirmation.
    let overwriting = cli.vault.exists();
    if overwriting && !force {
        let confirmed = Confirm::new()
            .with_prompt("This will overwrite your existing vault file. Are you sure?")
            .default(false)
            .interact()
            .map_err(|e| PassLockError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    // 2. Prompt for a new passphrase (with confirmation) before anything
    //    touches the old vault, so a rejected or aborted passphrase leaves
    //    it exactly as it was.
    let passphrase = prompt_new_passphrase()?;

    // 3. The overwrite goes through the atomic temp-file + rename write,
    //    so the old vault survives on disk until the new one replaces it.
    let store = if overwriting {
        VaultStore::replace(&cli.vault, &passphrase)?
    } else {
        VaultStore::create(&cli.vault, &passphrase)?
    };

    output::success(&format!("Vault created at {}", store.path().display()));
    output::tip("Run `passlock add` to add an entry.");
    output::tip("Run `passlock list` to see all entries.");

    Ok(())
}
