//! Vault module — encrypted password record storage.
//!
//! This module provides:
//! - The `Record` type stored in a vault (`record`)
//! - Sealing and opening the encrypted blob format (`codec`)
//! - High-level `VaultStore` for creating, opening, and editing vaults (`store`)

pub mod codec;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use codec::{open, seal};
pub use record::Record;
pub use store::VaultStore;
