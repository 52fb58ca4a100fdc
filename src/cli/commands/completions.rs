//! `passlock completions` — emit a completion script for the given shell.
//!
//! The script goes to stdout, so it can be redirected wherever the shell
//! expects it, e.g. `passlock completions zsh > ~/.zfunc/_passlock`.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::{PassLockError, Result};

/// Execute the `completions` command.
pub fn execute(shell: &str) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "passlock", &mut io::stdout());
    Ok(())
}

/// Map a user-supplied shell name onto clap_complete's `Shell`.
/// Case-insensitive, with the common PowerShell abbreviations accepted.
fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" | "ps" => Ok(Shell::PowerShell),
        "elvish" => Ok(Shell::Elvish),
        other => Err(PassLockError::CommandFailed(format!(
            "unknown shell '{other}' — supported: bash, zsh, fish, powershell, elvish"
        ))),
    }
}
