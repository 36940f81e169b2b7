//! Entry storage
//!
//! The aggregation services only ever see a `Vec<LedgerEntry>` snapshot; this
//! module is where that snapshot comes from and where edits go.

mod json_store;
mod transfer;

pub use json_store::JsonLedgerStore;
pub use transfer::{export_to, import_from, ImportReport, SkippedRecord};

use crate::services::{validate, EntryDraft, ValidEntry};
use crate::types::{LedgerEntry, Result, SpendtrackError};

/// Trait for ledger backends
pub trait EntryStore {
    /// Every entry, newest insert first
    fn load(&self) -> Result<Vec<LedgerEntry>>;

    /// Add already validated entries in front of the existing ones.
    /// Returns the stored entries with their new ids.
    fn insert_many(&self, entries: Vec<ValidEntry>) -> Result<Vec<LedgerEntry>>;

    /// Replace every field but the id
    fn update(&self, id: &str, draft: &EntryDraft) -> Result<LedgerEntry>;

    /// Delete one entry, returning it
    fn remove(&self, id: &str) -> Result<LedgerEntry>;

    /// Delete everything. Returns how many entries were removed.
    fn clear(&self) -> Result<usize>;

    /// Validate and add a single entry
    fn insert(&self, draft: &EntryDraft) -> Result<LedgerEntry> {
        let valid = validate(draft)?;
        self.insert_many(vec![valid])?
            .pop()
            .ok_or_else(|| SpendtrackError::Store("insert stored nothing".into()))
    }

    /// Look up one entry by id
    fn get(&self, id: &str) -> Result<Option<LedgerEntry>> {
        Ok(self.load()?.into_iter().find(|e| e.id == id))
    }
}
