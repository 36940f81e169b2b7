//! Aggregator service for computing ledger rollups

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

use super::date_codec;
use super::iso_week::IsoWeek;
use crate::types::{category_info, CategoryTotal, LedgerEntry, RawStats, SeriesPoint};

/// Number of days in the recent activity series
pub const SERIES_DAYS: i64 = 7;

/// Aggregator for computing ledger rollups
pub struct Aggregator;

impl Aggregator {
    /// Single pass over `entries` relative to `anchor` ("today").
    ///
    /// Every accumulator is updated in the same traversal. Entries with an
    /// unparsable amount add 0 to the totals but still land in their buckets.
    /// An unreadable date key is treated as the anchor date.
    pub fn aggregate(entries: &[LedgerEntry], anchor: NaiveDate) -> RawStats {
        let anchor_key = date_codec::encode(anchor);
        let anchor_week = IsoWeek::of(anchor);

        let mut stats = RawStats {
            seven_day_series: seed_series(anchor),
            ..RawStats::default()
        };
        let series_index: HashMap<String, usize> = stats
            .seven_day_series
            .iter()
            .enumerate()
            .map(|(i, point)| (point.date_key.clone(), i))
            .collect();
        let mut category_index: HashMap<&str, usize> = HashMap::new();

        for entry in entries {
            let date = date_codec::decode_or(&entry.date_key, anchor);
            let amount = entry.amount.value();
            let week = IsoWeek::of(date);

            stats.total += amount;
            if entry.date_key == anchor_key {
                stats.daily += amount;
            }
            if week == anchor_week {
                stats.weekly += amount;
            }
            if date.year() == anchor.year() && date.month() == anchor.month() {
                stats.monthly += amount;
            }

            let slot = *category_index
                .entry(entry.category.as_str())
                .or_insert_with(|| {
                    let info = category_info(&entry.category);
                    stats.category_totals.push(CategoryTotal {
                        name: entry.category.clone(),
                        total: 0.0,
                        color: info.color,
                        icon: info.icon,
                    });
                    stats.category_totals.len() - 1
                });
            stats.category_totals[slot].total += amount;

            if let Some(&i) = series_index.get(&date_codec::encode(date)) {
                stats.seven_day_series[i].total += amount;
            }

            stats
                .month_buckets
                .entry(month_key(date))
                .or_default()
                .add(entry, amount);
            stats
                .week_buckets
                .entry(week.period_key())
                .or_default()
                .add(entry, amount);
        }

        // Stable: equal totals keep first-seen order
        stats
            .category_totals
            .sort_by(|a, b| b.total.total_cmp(&a.total));

        tracing::debug!(
            entries = entries.len(),
            categories = stats.category_totals.len(),
            months = stats.month_buckets.len(),
            weeks = stats.week_buckets.len(),
            %anchor,
            "aggregated ledger"
        );

        stats
    }
}

/// `YYYY-MM`
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Zeroed points for `anchor - 6` through `anchor`, oldest first.
/// Days before chrono's minimum date are left out.
fn seed_series(anchor: NaiveDate) -> Vec<SeriesPoint> {
    (0..SERIES_DAYS)
        .rev()
        .filter_map(|offset| anchor.checked_sub_signed(Duration::days(offset)))
        .map(|date| SeriesPoint {
            date_key: date_codec::encode(date),
            day_label: date.format("%a").to_string(),
            total: 0.0,
        })
        .collect()
}
