//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` wraps the codec layer so the rest of the application can
//! work with simple method calls like `store.add_record(record)`. It holds
//! the decrypted record list and the master passphrase in memory; every
//! `save` re-seals the whole collection from scratch with a fresh salt and
//! IV — there is no in-place diffing.

use std::fs;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::errors::{PassLockError, Result};

use super::codec;
use super::record::Record;

/// The main vault handle. Create one with `VaultStore::create` or
/// `VaultStore::open`, then use its methods to manage entries.
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// The master passphrase, retained so `save` can re-seal.
    /// Wiped from memory on drop.
    passphrase: Zeroizing<String>,

    /// Decrypted entries, in insertion order. Order is meaningful: the
    /// CLI addresses entries by their position in this list.
    records: Vec<Record>,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a brand-new empty vault file at `path`.
    ///
    /// Seals an empty record list and writes it to disk immediately, so
    /// a subsequent `open` with the same passphrase succeeds even if no
    /// entry is ever added. Fails if a vault already exists at `path`;
    /// use `replace` for a deliberate overwrite.
    pub fn create(path: &Path, passphrase: &str) -> Result<Self> {
        if path.exists() {
            return Err(PassLockError::VaultAlreadyExists(path.to_path_buf()));
        }
        Self::replace(path, passphrase)
    }

    /// Overwrite whatever is at `path` with a brand-new empty vault.
    ///
    /// Goes through the same temp-file + rename write as `save`, so the
    /// old vault file stays intact on disk until the new one is fully
    /// written — a failure at any point before the rename leaves the
    /// previous vault untouched.
    pub fn replace(path: &Path, passphrase: &str) -> Result<Self> {
        let store = Self {
            path: path.to_path_buf(),
            passphrase: Zeroizing::new(passphrase.to_string()),
            records: Vec::new(),
        };

        store.save()?;
        Ok(store)
    }

    /// Open an existing vault file.
    ///
    /// Reads the blob text and decrypts it with the passphrase. A wrong
    /// passphrase or a corrupted file both surface as `AuthFailure`.
    pub fn open(path: &Path, passphrase: &str) -> Result<Self> {
        if !path.exists() {
            return Err(PassLockError::VaultNotFound(path.to_path_buf()));
        }

        let blob = fs::read_to_string(path)?;
        let records = codec::open(&blob, passphrase)?;

        Ok(Self {
            path: path.to_path_buf(),
            passphrase: Zeroizing::new(passphrase.to_string()),
            records,
        })
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Append an entry to the end of the list.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replace the entry at `index`.
    pub fn update_record(&mut self, index: usize, record: Record) -> Result<()> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or(PassLockError::EntryNotFound(index))?;
        *slot = record;
        Ok(())
    }

    /// Remove and return the entry at `index`. Later entries shift down,
    /// exactly like deleting from the display list.
    pub fn remove_record(&mut self, index: usize) -> Result<Record> {
        if index >= self.records.len() {
            return Err(PassLockError::EntryNotFound(index));
        }
        Ok(self.records.remove(index))
    }

    /// Borrow the entry at `index`.
    pub fn record(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .ok_or(PassLockError::EntryNotFound(index))
    }

    /// All entries, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of entries in the vault.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Replace the master passphrase. Takes effect on the next `save`.
    pub fn set_passphrase(&mut self, passphrase: &str) {
        self.passphrase = Zeroizing::new(passphrase.to_string());
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Seal the full record list and write it to disk **atomically**.
    ///
    /// Re-encrypts everything with a brand-new salt and IV, writes to a
    /// temp file in the same directory, then renames over the target so
    /// readers never see a half-written vault.
    pub fn save(&self) -> Result<()> {
        let blob = codec::seal(&self.records, &self.passphrase)?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, blob.as_bytes())?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
