//! Integration tests for the file-backed `VaultStore`.

use std::fs;

use passlock::errors::PassLockError;
use passlock::vault::{Record, VaultStore};
use tempfile::TempDir;

/// Helper: create a temporary vault file path inside a fresh temp dir.
fn vault_path() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("passwords.vault");
    (dir, path)
}

fn sample(title: &str) -> Record {
    Record {
        title: title.to_string(),
        username: format!("{title}@example.com"),
        password: format!("{title}-secret"),
        notes: String::new(),
    }
}

// ---------------------------------------------------------------------------
// Create and re-open round-trip
// ---------------------------------------------------------------------------

#[test]
fn create_vault_and_reopen() {
    let (_dir, path) = vault_path();

    let mut store = VaultStore::create(&path, "test-password").expect("create vault");
    store.add_record(sample("gmail"));
    store.save().unwrap();

    let store2 = VaultStore::open(&path, "test-password").expect("open vault");
    assert_eq!(store2.record_count(), 1);
    assert_eq!(store2.record(0).unwrap().title, "gmail");
}

#[test]
fn create_writes_an_openable_empty_vault() {
    let (_dir, path) = vault_path();

    VaultStore::create(&path, "empty-vault-pw").expect("create");

    // No save call in between — create itself must persist.
    let store = VaultStore::open(&path, "empty-vault-pw").expect("open");
    assert_eq!(store.record_count(), 0);
}

#[test]
fn create_on_existing_path_fails() {
    let (_dir, path) = vault_path();

    VaultStore::create(&path, "first-pw").unwrap();
    let result = VaultStore::create(&path, "second-pw");

    assert!(matches!(
        result,
        Err(PassLockError::VaultAlreadyExists(_))
    ));
}

#[test]
fn replace_overwrites_existing_vault_with_empty_one() {
    let (_dir, path) = vault_path();

    let mut store = VaultStore::create(&path, "old-pw-original").unwrap();
    store.add_record(sample("doomed"));
    store.save().unwrap();

    VaultStore::replace(&path, "brand-new-pw").unwrap();

    let reopened = VaultStore::open(&path, "brand-new-pw").unwrap();
    assert_eq!(reopened.record_count(), 0);
    assert!(matches!(
        VaultStore::open(&path, "old-pw-original"),
        Err(PassLockError::AuthFailure)
    ));
}

#[test]
fn open_missing_vault_fails() {
    let (_dir, path) = vault_path();

    let result = VaultStore::open(&path, "whatever");
    assert!(matches!(result, Err(PassLockError::VaultNotFound(_))));
}

#[test]
fn open_with_wrong_passphrase_is_auth_failure() {
    let (_dir, path) = vault_path();

    VaultStore::create(&path, "right-password").unwrap();

    let result = VaultStore::open(&path, "wrong-password");
    assert!(matches!(result, Err(PassLockError::AuthFailure)));
}

// ---------------------------------------------------------------------------
// Positional entry operations
// ---------------------------------------------------------------------------

#[test]
fn entries_keep_insertion_order_across_saves() {
    let (_dir, path) = vault_path();

    let mut store = VaultStore::create(&path, "order-pw").unwrap();
    store.add_record(sample("zzz"));
    store.add_record(sample("aaa"));
    store.add_record(sample("mmm"));
    store.save().unwrap();

    let store2 = VaultStore::open(&path, "order-pw").unwrap();
    let titles: Vec<&str> = store2.records().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["zzz", "aaa", "mmm"]);
}

#[test]
fn update_record_replaces_in_place() {
    let (_dir, path) = vault_path();

    let mut store = VaultStore::create(&path, "update-pw").unwrap();
    store.add_record(sample("first"));
    store.add_record(sample("second"));

    store.update_record(0, sample("replaced")).unwrap();

    assert_eq!(store.record(0).unwrap().title, "replaced");
    assert_eq!(store.record(1).unwrap().title, "second");
}

#[test]
fn remove_record_shifts_later_entries_down() {
    let (_dir, path) = vault_path();

    let mut store = VaultStore::create(&path, "remove-pw").unwrap();
    store.add_record(sample("a"));
    store.add_record(sample("b"));
    store.add_record(sample("c"));

    let removed = store.remove_record(1).unwrap();
    assert_eq!(removed.title, "b");

    assert_eq!(store.record_count(), 2);
    assert_eq!(store.record(1).unwrap().title, "c");
}

#[test]
fn out_of_range_index_is_entry_not_found() {
    let (_dir, path) = vault_path();

    let mut store = VaultStore::create(&path, "range-pw").unwrap();
    store.add_record(sample("only"));

    assert!(matches!(
        store.record(1),
        Err(PassLockError::EntryNotFound(1))
    ));
    assert!(matches!(
        store.update_record(5, sample("x")),
        Err(PassLockError::EntryNotFound(5))
    ));
    assert!(matches!(
        store.remove_record(3),
        Err(PassLockError::EntryNotFound(3))
    ));
}

// ---------------------------------------------------------------------------
// Persistence behavior
// ---------------------------------------------------------------------------

#[test]
fn every_save_rewrites_the_whole_blob() {
    let (_dir, path) = vault_path();

    let store = VaultStore::create(&path, "resave-pw").unwrap();
    let blob1 = fs::read_to_string(&path).unwrap();

    // Same records, same passphrase — but a fresh salt and IV every save.
    store.save().unwrap();
    let blob2 = fs::read_to_string(&path).unwrap();

    assert_ne!(blob1, blob2);
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let (dir, path) = vault_path();

    let store = VaultStore::create(&path, "atomic-pw").unwrap();
    store.save().unwrap();

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp file should have been renamed");
}

#[test]
fn change_passphrase_reseals_under_new_one() {
    let (_dir, path) = vault_path();

    let mut store = VaultStore::create(&path, "old-passphrase").unwrap();
    store.add_record(sample("kept"));
    store.set_passphrase("new-passphrase");
    store.save().unwrap();

    // Old passphrase no longer opens the vault; new one does.
    assert!(matches!(
        VaultStore::open(&path, "old-passphrase"),
        Err(PassLockError::AuthFailure)
    ));
    let reopened = VaultStore::open(&path, "new-passphrase").unwrap();
    assert_eq!(reopened.record(0).unwrap().title, "kept");
}

#[test]
fn truncated_vault_file_is_auth_failure() {
    let (_dir, path) = vault_path();

    VaultStore::create(&path, "truncate-pw").unwrap();

    // Corrupt the file on disk by chopping off most of the blob.
    let blob = fs::read_to_string(&path).unwrap();
    fs::write(&path, &blob[..8]).unwrap();

    let result = VaultStore::open(&path, "truncate-pw");
    assert!(matches!(result, Err(PassLockError::AuthFailure)));
}
