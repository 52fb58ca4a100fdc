//! `passlock change-password` — re-seal the vault under a new passphrase.

use crate::cli::output;
use crate::cli::{open_vault, prompt_new_passphrase, Cli};
use crate::errors::Result;

/// Execute the `change-password` command.
///
/// Opens the vault with the current passphrase (which authenticates the
/// caller), then saves it under the new one. The save re-encrypts the
/// whole collection with a fresh salt and IV, so nothing derived from the
/// old passphrase survives in the file.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut store = open_vault(cli)?;

    output::info("Vault unlocked. Choose the new passphrase.");
    let new_passphrase = prompt_new_passphrase()?;

    store.set_passphrase(&new_passphrase);
    store.save()?;

    output::success("Master passphrase changed.");
    Ok(())
}
