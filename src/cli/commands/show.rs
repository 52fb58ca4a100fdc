//! `passlock show` — print one entry's details.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, index: usize, reveal: bool) -> Result<()> {
    let store = open_vault(cli)?;
    let record = store.record(index)?;

    output::print_record_details(index, record, reveal);
    Ok(())
}
