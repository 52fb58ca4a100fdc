//! Sealing and opening the encrypted vault blob.
//!
//! A vault file holds a single base64 text blob with this decoded layout:
//!
//! ```text
//! [salt: 16 bytes][IV: 16 bytes][ciphertext: N bytes]
//! ```
//!
//! - **Salt**: fresh random bytes on every seal, consumed by PBKDF2 so the
//!   same key can be rederived on open.
//! - **IV**: fresh random bytes on every seal.
//! - **Ciphertext**: AES-256-CFB over the JSON serialization of the record
//!   list. CFB needs no padding, so N equals the plaintext length.
//! - **base64**: standard alphabet, with padding.
//!
//! There is no MAC and no AEAD tag. Authentication is implicit: opening
//! succeeds only if the decrypted bytes are valid UTF-8 *and* parse as the
//! record-list JSON. A wrong passphrase yields garbage that (with
//! overwhelming probability) fails one of those checks, and every expected
//! failure — malformed base64, truncated blob, bad UTF-8, bad JSON — is
//! collapsed into `AuthFailure` so a caller cannot distinguish a wrong
//! password from a corrupted file. That conflation is a format requirement,
//! not an accident; do not "improve" it by surfacing the causes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroize;

use crate::crypto::encryption::{decrypt, encrypt, generate_iv, IV_LEN};
use crate::crypto::kdf::{derive_key, SALT_LEN};
use crate::errors::{PassLockError, Result};

use super::record::Record;

/// Minimum decoded blob size: salt + IV + at least one ciphertext byte.
/// Anything shorter is structurally corrupt.
const MIN_BLOB_LEN: usize = SALT_LEN + IV_LEN + 1;

/// Encrypt a record list under a passphrase, producing the base64 blob.
///
/// Every call generates a brand-new salt and IV, so sealing the same
/// records twice with the same passphrase never produces the same output.
/// The derived key lives only for the duration of this call.
pub fn seal(records: &[Record], passphrase: &str) -> Result<String> {
    let mut json = serde_json::to_vec(records)
        .map_err(|e| PassLockError::SerializationError(format!("records: {e}")))?;

    let (key, salt) = derive_key(passphrase, None);
    let iv = generate_iv();
    let ciphertext = encrypt(key.as_bytes(), &iv, &json);
    json.zeroize();

    let mut blob = Vec::with_capacity(SALT_LEN + IV_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(&blob))
}

/// Decrypt a base64 blob back into the record list.
///
/// Returns `AuthFailure` for every expected failure mode; the only errors
/// that surface distinctly are genuinely unexpected faults upstream of
/// this call (I/O belongs to the caller).
pub fn open(blob: &str, passphrase: &str) -> Result<Vec<Record>> {
    // Surrounding whitespace (e.g. a trailing newline added by an editor)
    // is not part of the blob.
    let raw = BASE64
        .decode(blob.trim())
        .map_err(|_| PassLockError::AuthFailure)?;

    if raw.len() < MIN_BLOB_LEN {
        return Err(PassLockError::AuthFailure);
    }

    let (salt_bytes, rest) = raw.split_at(SALT_LEN);
    let (iv_bytes, ciphertext) = rest.split_at(IV_LEN);

    // The splits are length-checked above, so these cannot fail.
    let salt: [u8; SALT_LEN] = salt_bytes
        .try_into()
        .map_err(|_| PassLockError::AuthFailure)?;
    let iv: [u8; IV_LEN] = iv_bytes
        .try_into()
        .map_err(|_| PassLockError::AuthFailure)?;

    // Always the salt from the blob here, never a fresh one.
    let (key, _) = derive_key(passphrase, Some(&salt));

    // CFB decryption cannot fail — a wrong key just yields garbage.
    let plaintext = decrypt(key.as_bytes(), &iv, ciphertext);

    // UTF-8 validity and JSON shape are the sole authentication signals.
    let mut text = String::from_utf8(plaintext).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        PassLockError::AuthFailure
    })?;

    let parsed: std::result::Result<Vec<Record>, _> = serde_json::from_str(&text);
    text.zeroize();

    parsed.map_err(|_| PassLockError::AuthFailure)
}
