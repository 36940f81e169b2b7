//! Turns raw period buckets into labeled, newest-first history

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::types::{PeriodBucket, RawBucket, RawStats, Stats};

pub struct HistoryProjector;

impl HistoryProjector {
    /// Finish a raw aggregation into the full `Stats` snapshot
    pub fn project(raw: RawStats) -> Stats {
        Stats {
            daily: raw.daily,
            weekly: raw.weekly,
            monthly: raw.monthly,
            total: raw.total,
            category_totals: raw.category_totals,
            seven_day_series: raw.seven_day_series,
            monthly_history: Self::months(raw.month_buckets),
            weekly_history: Self::weeks(raw.week_buckets),
        }
    }

    /// Month buckets, newest first, labeled "March 2024"
    pub fn months(buckets: HashMap<String, RawBucket>) -> Vec<PeriodBucket> {
        into_sorted(buckets, month_label)
    }

    /// Week buckets, newest first, labeled "Week 09, 2024"
    pub fn weeks(buckets: HashMap<String, RawBucket>) -> Vec<PeriodBucket> {
        into_sorted(buckets, week_label)
    }
}

// Period keys are fixed width and zero padded, so string order is date order.
fn into_sorted(
    buckets: HashMap<String, RawBucket>,
    label: fn(&str) -> String,
) -> Vec<PeriodBucket> {
    let mut history: Vec<PeriodBucket> = buckets
        .into_iter()
        .map(|(period_key, bucket)| PeriodBucket {
            label: label(&period_key),
            period_key,
            total: bucket.total,
            count: bucket.count,
            items: bucket.items,
        })
        .collect();
    history.sort_by(|a, b| b.period_key.cmp(&a.period_key));
    history
}

fn month_label(key: &str) -> String {
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d")
        .map(|first| first.format("%B %Y").to_string())
        .unwrap_or_else(|_| key.to_string())
}

fn week_label(key: &str) -> String {
    match key.split_once("-W") {
        Some((year, week)) => format!("Week {week}, {year}"),
        None => key.to_string(),
    }
}
