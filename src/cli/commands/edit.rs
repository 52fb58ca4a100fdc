//! `passlock edit` — update an existing entry in place.
//!
//! Prompts are pre-filled with the current values, so pressing enter keeps
//! a field unchanged. The password prompt cannot echo the current value;
//! leaving it empty keeps the stored password.

use dialoguer::{Input, Password};

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PassLockError, Result};
use crate::vault::Record;

/// Execute the `edit` command.
pub fn execute(cli: &Cli, index: usize) -> Result<()> {
    let mut store = open_vault(cli)?;
    let current = store.record(index)?.clone();

    let title: String = Input::new()
        .with_prompt("Title")
        .default(current.title.clone())
        .interact_text()
        .map_err(|e| PassLockError::CommandFailed(format!("title prompt: {e}")))?;

    let username: String = Input::new()
        .with_prompt("Username or email")
        .default(current.username.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PassLockError::CommandFailed(format!("username prompt: {e}")))?;

    let new_password = Password::new()
        .with_prompt("Password (leave empty to keep current)")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassLockError::CommandFailed(format!("password prompt: {e}")))?;
    let password = if new_password.is_empty() {
        current.password.clone()
    } else {
        new_password
    };

    let notes: String = Input::new()
        .with_prompt("Notes")
        .default(current.notes.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PassLockError::CommandFailed(format!("notes prompt: {e}")))?;

    store.update_record(
        index,
        Record {
            title,
            username,
            password,
            notes,
        },
    )?;
    store.save()?;

    output::success(&format!("Updated entry at index {index}"));
    Ok(())
}
