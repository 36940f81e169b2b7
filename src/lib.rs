//! spendtrack: a local expense ledger with today/week/month rollups, category
//! breakdowns and week/month drill-down history.
//!
//! The rollup engine lives in [`services`] and is pure: hand it a snapshot of
//! entries and an anchor date, get back [`types::Stats`]. Storage, config and
//! logging are thin layers around it.

pub mod config;
pub mod logging;
pub mod services;
pub mod store;
pub mod types;

pub use services::{compute_stats, filter_entries, FilterCriteria};
pub use types::{LedgerEntry, Stats};
