//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The passphrase is stretched into a 32-byte AES-256 key with a 16-byte
//! random salt and a fixed iteration count. The iteration count is the
//! only brute-force throttle the vault has (there is no account lockout),
//! so it is deliberately expensive — on the order of 100ms per derivation.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count. Changing this breaks compatibility with every
/// existing vault file, since the count is not stored in the blob.
pub const PBKDF2_ROUNDS: u32 = 100_000;

/// A 32-byte vault key that zeroes its memory when dropped.
///
/// The key is scoped to a single seal/open call — it is derived, used for
/// one encryption or decryption, and dropped. It is never persisted.
#[derive(ZeroizeOnDrop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    /// Access the raw key bytes (to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive a vault key from a passphrase.
///
/// If `salt` is `None` a fresh random salt is generated (seal path);
/// on the open path the caller passes the salt extracted from the blob.
/// Returns the key together with the salt actually used, so callers who
/// let us generate one can persist it alongside the ciphertext.
///
/// The same passphrase + salt always produce the same key. An empty
/// passphrase is accepted and yields a valid (but weak) key — strength
/// enforcement belongs to the UI layer, not here.
pub fn derive_key(passphrase: &str, salt: Option<&[u8; SALT_LEN]>) -> (VaultKey, [u8; SALT_LEN]) {
    let salt = match salt {
        Some(s) => *s,
        None => generate_salt(),
    };

    let mut bytes = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), &salt, PBKDF2_ROUNDS, &mut bytes);

    let key = VaultKey { bytes };
    bytes.zeroize();

    (key, salt)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
