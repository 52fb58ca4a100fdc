//! Integration tests for the PassLock crypto module.

use passlock::crypto::{decrypt, derive_key, encrypt, generate_iv, generate_salt};

// ---------------------------------------------------------------------------
// Key derivation (PBKDF2-HMAC-SHA256)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_same_inputs_same_output() {
    let salt = generate_salt();

    let (key1, salt1) = derive_key("my-secure-passphrase", Some(&salt));
    let (key2, salt2) = derive_key("my-secure-passphrase", Some(&salt));

    assert_eq!(salt1, salt);
    assert_eq!(salt2, salt);
    assert_eq!(
        key1.as_bytes(),
        key2.as_bytes(),
        "same passphrase + salt must produce the same key"
    );
}

#[test]
fn derive_key_fresh_salt_each_time() {
    // With no salt supplied, each call generates its own; both the salts
    // and the resulting keys must differ.
    let (key1, salt1) = derive_key("same-passphrase", None);
    let (key2, salt2) = derive_key("same-passphrase", None);

    assert_ne!(salt1, salt2, "generated salts must differ");
    assert_ne!(
        key1.as_bytes(),
        key2.as_bytes(),
        "different salts must produce different keys"
    );
}

#[test]
fn derive_key_returns_salt_it_used() {
    // The fresh salt handed back must rederive the same key.
    let (key1, salt) = derive_key("passphrase-one", None);
    let (key2, _) = derive_key("passphrase-one", Some(&salt));

    assert_eq!(key1.as_bytes(), key2.as_bytes());
}

#[test]
fn derive_key_different_passphrases_different_keys() {
    let salt = generate_salt();

    let (key1, _) = derive_key("passphrase-one", Some(&salt));
    let (key2, _) = derive_key("passphrase-two", Some(&salt));

    assert_ne!(
        key1.as_bytes(),
        key2.as_bytes(),
        "different passphrases must produce different keys"
    );
}

#[test]
fn derive_key_accepts_empty_passphrase() {
    // Weak, but valid — strength enforcement is the CLI's job.
    let salt = generate_salt();
    let (key1, _) = derive_key("", Some(&salt));
    let (key2, _) = derive_key("", Some(&salt));

    assert_eq!(key1.as_bytes(), key2.as_bytes());
}

#[test]
fn vault_key_debug_redacts_bytes() {
    let (key, _) = derive_key("hunter2-hunter2", None);
    let rendered = format!("{key:?}");

    assert!(rendered.contains("REDACTED"));
    assert!(!rendered.contains("hunter2"));
}

// ---------------------------------------------------------------------------
// AES-256-CFB
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = [0xABu8; 32];
    let iv = generate_iv();
    let plaintext = b"[{\"title\":\"Gmail\"}]";

    let ciphertext = encrypt(&key, &iv, plaintext);
    let recovered = decrypt(&key, &iv, &ciphertext);

    assert_eq!(recovered, plaintext);
}

#[test]
fn ciphertext_length_equals_plaintext_length() {
    // CFB is a stream mode: no padding, no tag.
    let key = [0xCDu8; 32];
    let iv = generate_iv();

    for len in [0usize, 1, 15, 16, 17, 100] {
        let plaintext = vec![0x42u8; len];
        let ciphertext = encrypt(&key, &iv, &plaintext);
        assert_eq!(ciphertext.len(), plaintext.len(), "length {len}");
    }
}

#[test]
fn decrypt_with_wrong_key_yields_garbage_not_error() {
    // CFB never fails on a bad key — it just produces different bytes.
    let key = [0x11u8; 32];
    let wrong_key = [0x22u8; 32];
    let iv = generate_iv();
    let plaintext = b"top secret notes";

    let ciphertext = encrypt(&key, &iv, plaintext);
    let garbage = decrypt(&wrong_key, &iv, &ciphertext);

    assert_eq!(garbage.len(), plaintext.len());
    assert_ne!(garbage, plaintext);
}

#[test]
fn same_plaintext_different_iv_different_ciphertext() {
    let key = [0x33u8; 32];
    let iv1 = generate_iv();
    let iv2 = generate_iv();
    assert_ne!(iv1, iv2, "generated IVs must differ");

    let plaintext = b"identical plaintext";
    let ct1 = encrypt(&key, &iv1, plaintext);
    let ct2 = encrypt(&key, &iv2, plaintext);

    assert_ne!(ct1, ct2);
}
