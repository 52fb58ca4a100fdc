//! The `Record` type stored inside a vault.
//!
//! A record is four free-form UTF-8 text fields. There is no uniqueness
//! constraint on titles and no schema version — the vault is an ordered
//! list of these, and the position of a record in that list is how the
//! CLI addresses it for show/edit/remove.

use serde::{Deserialize, Serialize};

/// A single password entry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// What the entry is for (e.g. "Gmail"). Not required to be unique.
    pub title: String,

    /// Username or email for the account. May be empty.
    pub username: String,

    /// The stored password.
    pub password: String,

    /// Additional free-form notes. May be empty.
    pub notes: String,
}

// Hand-written so the password never ends up in debug output or panic
// messages from test assertions.
impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("notes", &self.notes)
            .finish()
    }
}
