//! JSON file ledger
//!
//! The whole ledger is one JSON array. Reads take a shared lock, and every
//! read-modify-write holds an exclusive lock on a sidecar `.lock` file while a
//! uniquely named temp file replaces the ledger.

use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

use super::EntryStore;
use crate::services::{validate, EntryDraft, ValidEntry};
use crate::types::{LedgerEntry, Result, SpendtrackError};

pub struct JsonLedgerStore {
    path: PathBuf,
    owner: String,
}

impl JsonLedgerStore {
    pub fn new(path: PathBuf, owner: impl Into<String>) -> Self {
        Self {
            path,
            owner: owner.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sidecar lock file. The ledger itself is replaced by rename on every
    /// write, so locks are taken on this file instead.
    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("json.lock")
    }

    fn open_lock(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(|e| SpendtrackError::Store(format!("Failed to open lock file: {}", e)))
    }

    /// Run a read-modify-write cycle under one exclusive lock
    fn with_write_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = self.open_lock()?;
        lock.lock_exclusive()
            .map_err(|e| SpendtrackError::Store(format!("Failed to acquire write lock: {}", e)))?;
        let result = f();
        let _ = lock.unlock();
        result
    }

    /// A missing or empty file is an empty ledger. A file that isn't valid JSON
    /// is an error: it is never silently replaced.
    fn read_entries(&self) -> Result<Vec<LedgerEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut content = String::new();
        std::io::BufReader::new(File::open(&self.path)?).read_to_string(&mut content)?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            SpendtrackError::Store(format!(
                "Corrupted ledger file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Caller must hold the write lock
    fn write_entries(&self, entries: &[LedgerEntry]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| SpendtrackError::Store(format!("Serialization failed: {}", e)))?;

        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| SpendtrackError::Store(format!("Failed to create temp file: {}", e)))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| SpendtrackError::Store(format!("Failed to write temp file: {}", e)))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| SpendtrackError::Store(format!("Failed to sync temp file: {}", e)))?;
        temp.persist(&self.path).map_err(|e| {
            SpendtrackError::Store(format!("Failed to replace ledger file: {}", e.error))
        })?;

        tracing::debug!(path = %self.path.display(), entries = entries.len(), "ledger saved");
        Ok(())
    }

    fn position(entries: &[LedgerEntry], id: &str) -> Result<usize> {
        entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SpendtrackError::NotFound(id.to_string()))
    }
}

impl EntryStore for JsonLedgerStore {
    fn load(&self) -> Result<Vec<LedgerEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let lock = self.open_lock()?;
        lock.lock_shared()
            .map_err(|e| SpendtrackError::Store(format!("Failed to acquire read lock: {}", e)))?;
        let entries = self.read_entries();
        let _ = lock.unlock();

        let entries = entries?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "ledger loaded");
        Ok(entries)
    }

    fn insert_many(&self, entries: Vec<ValidEntry>) -> Result<Vec<LedgerEntry>> {
        let added: Vec<LedgerEntry> = entries
            .into_iter()
            .map(|valid| valid.into_entry(Uuid::new_v4().to_string(), &self.owner))
            .collect();

        let total = self.with_write_lock(|| {
            let existing = self.read_entries()?;
            let mut all = Vec::with_capacity(added.len() + existing.len());
            all.extend(added.iter().cloned());
            all.extend(existing);
            self.write_entries(&all)?;
            Ok(all.len())
        })?;

        tracing::info!(added = added.len(), total, "entries added");
        Ok(added)
    }

    fn update(&self, id: &str, draft: &EntryDraft) -> Result<LedgerEntry> {
        let valid = validate(draft)?;
        let updated = self.with_write_lock(|| {
            let mut entries = self.read_entries()?;
            let idx = Self::position(&entries, id)?;

            let owner = entries[idx].owner_ref.clone();
            entries[idx] = valid.into_entry(id.to_string(), &owner);
            self.write_entries(&entries)?;
            Ok(entries.swap_remove(idx))
        })?;

        tracing::info!(id, "entry updated");
        Ok(updated)
    }

    fn remove(&self, id: &str) -> Result<LedgerEntry> {
        let removed = self.with_write_lock(|| {
            let mut entries = self.read_entries()?;
            let idx = Self::position(&entries, id)?;
            let removed = entries.remove(idx);
            self.write_entries(&entries)?;
            Ok(removed)
        })?;

        tracing::info!(id, "entry deleted");
        Ok(removed)
    }

    fn clear(&self) -> Result<usize> {
        let count = self.with_write_lock(|| {
            let count = self.read_entries()?.len();
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            Ok(count)
        })?;

        tracing::info!(removed = count, "ledger cleared");
        Ok(count)
    }
}
