//! AES-256-CFB encryption and decryption.
//!
//! CFB turns AES into a self-synchronizing stream cipher: no padding is
//! needed and the ciphertext is exactly as long as the plaintext. Unlike
//! an AEAD mode there is no authentication tag — decrypting with the
//! wrong key never fails, it just produces garbage bytes. The codec layer
//! treats "the garbage doesn't parse" as its authentication signal.

use aes::Aes256;
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use rand::RngCore;

use crate::crypto::kdf::KEY_LEN;

/// Size of the AES-CFB initialization vector in bytes (one AES block).
pub const IV_LEN: usize = 16;

type Aes256CfbEnc = cfb_mode::Encryptor<Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<Aes256>;

/// Generate a cryptographically random 16-byte IV.
///
/// A fresh IV per encryption ensures identical plaintexts never produce
/// identical ciphertexts, even under the same key.
pub fn generate_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);
    iv
}

/// Encrypt `plaintext` with a 32-byte key and a 16-byte IV.
///
/// Returns the raw ciphertext, same length as the plaintext. The caller
/// owns prepending the salt and IV before persisting.
pub fn encrypt(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN], plaintext: &[u8]) -> Vec<u8> {
    let mut buf = plaintext.to_vec();
    Aes256CfbEnc::new(key.into(), iv.into()).encrypt(&mut buf);
    buf
}

/// Decrypt raw ciphertext with a 32-byte key and a 16-byte IV.
///
/// Infallible by construction: a wrong key or IV yields garbage bytes of
/// the same length, never an error.
pub fn decrypt(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN], ciphertext: &[u8]) -> Vec<u8> {
    let mut buf = ciphertext.to_vec();
    Aes256CfbDec::new(key.into(), iv.into()).decrypt(&mut buf);
    buf
}
