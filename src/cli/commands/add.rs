//! `passlock add` — append a new entry via interactive prompts.

use dialoguer::{Input, Password};

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PassLockError, Result};
use crate::vault::Record;

/// Execute the `add` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut store = open_vault(cli)?;

    let record = prompt_record()?;
    let title = record.title.clone();

    store.add_record(record);
    store.save()?;

    output::success(&format!(
        "Added entry '{title}' at index {}",
        store.record_count() - 1
    ));

    Ok(())
}

/// Prompt for all four record fields. Title must be non-empty; the other
/// fields may be left blank.
fn prompt_record() -> Result<Record> {
    let title: String = Input::new()
        .with_prompt("Title (e.g. Gmail, Facebook)")
        .interact_text()
        .map_err(|e| PassLockError::CommandFailed(format!("title prompt: {e}")))?;

    let username: String = Input::new()
        .with_prompt("Username or email")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PassLockError::CommandFailed(format!("username prompt: {e}")))?;

    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassLockError::CommandFailed(format!("password prompt: {e}")))?;

    let notes: String = Input::new()
        .with_prompt("Notes (optional)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PassLockError::CommandFailed(format!("notes prompt: {e}")))?;

    Ok(Record {
        title,
        username,
        password,
        notes,
    })
}
