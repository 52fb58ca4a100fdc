//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{PassLockError, Result};

/// Minimum passphrase length when creating a vault. Enforced only at
/// creation — the crypto core itself accepts any passphrase, including
/// an empty one.
const MIN_PASSPHRASE_LEN: usize = 8;

/// PassLock CLI: local encrypted password manager.
#[derive(Parser)]
#[command(
    name = "passlock",
    about = "Local encrypted password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault file (default: passwords.vault)
    #[arg(long, default_value = "passwords.vault", global = true)]
    pub vault: PathBuf,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new vault file
    Init {
        /// Overwrite an existing vault without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Add a new entry (interactive prompts)
    Add,

    /// List all entries
    List,

    /// Show one entry's details
    Show {
        /// Entry index as printed by `list`
        index: usize,

        /// Print the password in clear text instead of masking it
        #[arg(long)]
        reveal: bool,
    },

    /// Edit an existing entry
    Edit {
        /// Entry index as printed by `list`
        index: usize,
    },

    /// Remove an entry
    Remove {
        /// Entry index as printed by `list`
        index: usize,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Change the vault's master passphrase
    ChangePassword,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the vault passphrase, trying in order:
/// 1. `PASSLOCK_PASSWORD` env var (scripting/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    // 1. Check the environment variable first.
    if let Ok(pw) = std::env::var("PASSLOCK_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    // 2. Fall back to interactive prompt.
    let pw = dialoguer::Password::new()
        .with_prompt("Enter master passphrase")
        .interact()
        .map_err(|e| PassLockError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new passphrase with confirmation (used by `init` and
/// `change-password`).
///
/// Also respects `PASSLOCK_PASSWORD` for scripted usage. Enforces the
/// minimum passphrase length.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_new_passphrase() -> Result<Zeroizing<String>> {
    // Check the environment variable first (scripting/CI friendly).
    if let Ok(pw) = std::env::var("PASSLOCK_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSPHRASE_LEN {
                return Err(PassLockError::CommandFailed(format!(
                    "passphrase must be at least {MIN_PASSPHRASE_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let passphrase = dialoguer::Password::new()
            .with_prompt("Choose master passphrase")
            .with_confirmation(
                "Confirm master passphrase",
                "Passphrases do not match, try again",
            )
            .interact()
            .map_err(|e| PassLockError::CommandFailed(format!("passphrase prompt: {e}")))?;

        if passphrase.len() < MIN_PASSPHRASE_LEN {
            output::warning(&format!(
                "Passphrase must be at least {MIN_PASSPHRASE_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(passphrase));
    }
}

/// Open the vault at the CLI-selected path, prompting for the passphrase.
///
/// Shared by every command that reads or mutates an existing vault.
pub fn open_vault(cli: &Cli) -> Result<crate::vault::VaultStore> {
    let passphrase = prompt_passphrase()?;
    crate::vault::VaultStore::open(&cli.vault, &passphrase)
}
