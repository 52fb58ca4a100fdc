use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassLock.
#[derive(Debug, Error)]
pub enum PassLockError {
    // --- Crypto / codec errors ---
    /// The single outcome for every expected `open` failure: bad base64,
    /// truncated blob, non-UTF-8 plaintext, or plaintext that does not
    /// parse as the record list. The causes are deliberately conflated so
    /// callers cannot tell a wrong password from a corrupted file.
    #[error("Incorrect password or corrupted file")]
    AuthFailure,

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("No entry at index {0}")]
    EntryNotFound(usize),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassLock results.
pub type Result<T> = std::result::Result<T, PassLockError>;
