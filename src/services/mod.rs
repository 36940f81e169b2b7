//! Services for ledger aggregation, filtering and validation

pub mod aggregator;
pub mod date_codec;
pub mod filter;
pub mod history;
pub mod iso_week;
pub mod validator;

pub use aggregator::Aggregator;
pub use filter::{filter_entries, FilterCriteria};
pub use history::HistoryProjector;
pub use iso_week::IsoWeek;
pub use validator::{validate, EntryDraft, ValidEntry};

use chrono::NaiveDate;

use crate::types::{LedgerEntry, Stats};

/// Compute every derived view for `entries` as of `anchor`.
///
/// Pure and idempotent: the same snapshot and anchor always produce the same
/// `Stats`.
pub fn compute_stats(entries: &[LedgerEntry], anchor: NaiveDate) -> Stats {
    HistoryProjector::project(Aggregator::aggregate(entries, anchor))
}
