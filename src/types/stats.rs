//! Derived views produced by the aggregation engine

use serde::Serialize;
use std::collections::HashMap;

use super::LedgerEntry;

/// Spend in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: f64,
    /// Display color and icon from the category catalog
    pub color: &'static str,
    pub icon: &'static str,
}

/// One day of the recent activity series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date_key: String,
    /// Short weekday name ("Mon")
    pub day_label: String,
    pub total: f64,
}

/// Accumulator for one period key
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RawBucket {
    pub total: f64,
    pub count: u64,
    /// Entries in traversal order
    pub items: Vec<LedgerEntry>,
}

impl RawBucket {
    pub fn add(&mut self, entry: &LedgerEntry, amount: f64) {
        self.total += amount;
        self.count = self.count.saturating_add(1);
        self.items.push(entry.clone());
    }
}

/// A labeled history bucket (month or ISO week)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodBucket {
    /// `YYYY-MM` or `YYYY-Www`
    pub period_key: String,
    pub label: String,
    pub total: f64,
    pub count: u64,
    pub items: Vec<LedgerEntry>,
}

/// Output of the single aggregation pass, before history projection
#[derive(Debug, Clone, Default)]
pub struct RawStats {
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub total: f64,
    pub category_totals: Vec<CategoryTotal>,
    pub seven_day_series: Vec<SeriesPoint>,
    /// Keyed by `YYYY-MM`, unsorted
    pub month_buckets: HashMap<String, RawBucket>,
    /// Keyed by `YYYY-Www`, unsorted
    pub week_buckets: HashMap<String, RawBucket>,
}

/// Full derived snapshot for one entry set and anchor date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub total: f64,
    /// Descending by total, ties in first-seen order
    pub category_totals: Vec<CategoryTotal>,
    /// Exactly seven points, oldest first, ending at the anchor date
    pub seven_day_series: Vec<SeriesPoint>,
    /// Newest month first
    pub monthly_history: Vec<PeriodBucket>,
    /// Newest week first
    pub weekly_history: Vec<PeriodBucket>,
}
