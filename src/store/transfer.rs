//! Backup export and import

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::EntryStore;
use crate::services::{date_codec, validate, EntryDraft};
use crate::types::{LedgerEntry, Result, SpendtrackError, IMPORT_FALLBACK_CATEGORY};

/// Description given to imported records that carry none
pub const IMPORT_FALLBACK_DESCRIPTION: &str = "Imported Expense";

/// Outcome of an import
#[derive(Debug, Default, Serialize)]
pub struct ImportReport {
    pub imported: Vec<LedgerEntry>,
    pub skipped: Vec<SkippedRecord>,
}

/// A record that failed validation, by position in the source array
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

/// Write every entry as a pretty-printed JSON array. Returns the entry count.
pub fn export_to(store: &dyn EntryStore, path: &Path) -> Result<usize> {
    let entries = store.load()?;
    let content = serde_json::to_string_pretty(&entries)?;
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "ledger exported");
    Ok(entries.len())
}

/// Import a JSON array of loose records.
///
/// Missing fields get defaults (date → `today`, category → "Other",
/// description → "Imported Expense", amount → 0). Each record is then
/// validated; valid ones are added in file order ahead of the existing entries,
/// the rest are reported as skipped. Ids and owners in the file are ignored.
pub fn import_from(
    store: &dyn EntryStore,
    path: &Path,
    today: NaiveDate,
) -> Result<ImportReport> {
    let content = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)?;
    let records = document.as_array().ok_or_else(|| {
        SpendtrackError::Store("Invalid file format: expected a JSON array".into())
    })?;

    let today_key = date_codec::encode(today);
    let mut valid = Vec::with_capacity(records.len());
    let mut report = ImportReport::default();

    for (index, record) in records.iter().enumerate() {
        let outcome = draft_from_record(record, &today_key)
            .and_then(|draft| validate(&draft).map_err(|e| e.to_string()));
        match outcome {
            Ok(entry) => valid.push(entry),
            Err(reason) => {
                tracing::warn!(index, %reason, "skipping import record");
                report.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    if !valid.is_empty() {
        report.imported = store.insert_many(valid)?;
    }

    tracing::info!(
        path = %path.display(),
        imported = report.imported.len(),
        skipped = report.skipped.len(),
        "import finished"
    );
    Ok(report)
}

fn draft_from_record(
    record: &Value,
    today_key: &str,
) -> std::result::Result<EntryDraft, String> {
    let fields = record
        .as_object()
        .ok_or_else(|| "record is not a JSON object".to_string())?;

    // Empty strings count as missing
    let text = |key: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let amount = match fields.get("amount") {
        None | Some(Value::Null) => "0".to_string(),
        Some(Value::String(raw)) if raw.is_empty() => "0".to_string(),
        Some(Value::String(raw)) => raw.clone(),
        Some(other) => other.to_string(),
    };

    Ok(EntryDraft {
        date: text("date").unwrap_or_else(|| today_key.to_string()),
        category: text("category").unwrap_or_else(|| IMPORT_FALLBACK_CATEGORY.to_string()),
        amount,
        description: text("description")
            .unwrap_or_else(|| IMPORT_FALLBACK_DESCRIPTION.to_string()),
    })
}
