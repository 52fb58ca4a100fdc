//! Cryptographic primitives for PassLock.
//!
//! This module provides:
//! - AES-256-CFB encryption and decryption (`encryption`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)

pub mod encryption;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use encryption::{decrypt, encrypt, generate_iv, IV_LEN};
pub use kdf::{derive_key, generate_salt, VaultKey, KEY_LEN, SALT_LEN};
