//! `passlock list` — print the entry table.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let store = open_vault(cli)?;
    output::print_records_table(store.records());
    Ok(())
}
