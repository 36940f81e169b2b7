//! Filtered, date-sorted view of the ledger

use chrono::NaiveDate;

use super::date_codec;
use crate::types::LedgerEntry;

/// Active filters. `None` (or empty text) disables a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of description or category
    pub text: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    /// Exact date key
    pub date: Option<String>,
}

impl FilterCriteria {
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        let text_ok = match self.text.as_deref().filter(|t| !t.is_empty()) {
            Some(text) => {
                let needle = text.to_lowercase();
                entry.description.to_lowercase().contains(&needle)
                    || entry.category.to_lowercase().contains(&needle)
            }
            None => true,
        };

        text_ok
            && self
                .category
                .as_deref()
                .is_none_or(|category| entry.category == category)
            && self.date.as_deref().is_none_or(|date| entry.date_key == date)
    }
}

/// Entries matching every active filter, newest date first.
///
/// Entries on the same date keep their order in `entries`. Entries whose date
/// can't be read go last.
pub fn filter_entries<'a>(
    entries: &'a [LedgerEntry],
    criteria: &FilterCriteria,
) -> Vec<&'a LedgerEntry> {
    let mut matched: Vec<(Option<NaiveDate>, &LedgerEntry)> = entries
        .iter()
        .filter(|entry| criteria.matches(entry))
        .map(|entry| (date_codec::decode(&entry.date_key), entry))
        .collect();

    // `None < Some(_)`, so a descending stable sort leaves unreadable dates at the end
    matched.sort_by(|a, b| b.0.cmp(&a.0));

    matched.into_iter().map(|(_, entry)| entry).collect()
}
