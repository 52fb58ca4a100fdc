//! Implementations of each CLI subcommand.

pub mod add;
pub mod change_password;
pub mod completions;
pub mod edit;
pub mod init;
pub mod list;
pub mod remove;
pub mod show;
