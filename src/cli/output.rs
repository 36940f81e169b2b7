//! Plain-text rendering for CLI output

use std::fmt::Write;

use spendtrack::store::ImportReport;
use spendtrack::types::{LedgerEntry, PeriodBucket, Stats};

/// Two decimals with thousands separators: 1234.5 → "1,234.50"
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let len = int_part.len();
    let mut result = String::with_capacity(len + len / 3 + 4);
    if value < 0.0 && fixed != "0.00" {
        result.push('-');
    }
    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in int_part.bytes().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(ch as char);
    }
    result.push('.');
    result.push_str(frac_part);
    result
}

pub fn render_stats(stats: &Stats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Today       {:>14}", format_amount(stats.daily));
    let _ = writeln!(out, "This week   {:>14}", format_amount(stats.weekly));
    let _ = writeln!(out, "This month  {:>14}", format_amount(stats.monthly));
    let _ = writeln!(out, "All time    {:>14}", format_amount(stats.total));

    if !stats.category_totals.is_empty() {
        let _ = writeln!(out, "\nBy category");
        for category in &stats.category_totals {
            let _ = writeln!(
                out,
                "  {:<16}{:>14}  [{}]",
                category.name,
                format_amount(category.total),
                category.icon
            );
        }
    }

    let _ = writeln!(out, "\nLast 7 days");
    for point in &stats.seven_day_series {
        let _ = writeln!(
            out,
            "  {} {}{:>14}",
            point.day_label,
            point.date_key,
            format_amount(point.total)
        );
    }
    out
}

pub fn render_history(history: &[PeriodBucket]) -> String {
    if history.is_empty() {
        return "No entries\n".to_string();
    }
    let mut out = String::new();
    for bucket in history {
        let _ = writeln!(
            out,
            "{:<20}{:>14}  ({} {})",
            bucket.label,
            format_amount(bucket.total),
            bucket.count,
            if bucket.count == 1 { "entry" } else { "entries" }
        );
    }
    out
}

pub fn render_entries(entries: &[&LedgerEntry]) -> String {
    if entries.is_empty() {
        return "No entries\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let amount = match entry.amount.parsed() {
            Some(value) => format_amount(value),
            None => "invalid".to_string(),
        };
        let _ = writeln!(
            out,
            "{}  {:<10}  {:<14}{:>14}  {}",
            entry.id, entry.date_key, entry.category, amount, entry.description
        );
    }
    out
}

pub fn render_import_report(report: &ImportReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Imported {} entries", report.imported.len());
    for skipped in &report.skipped {
        let _ = writeln!(out, "  skipped record {}: {}", skipped.index, skipped.reason);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use spendtrack::compute_stats;
    use spendtrack::types::Amount;

    fn make_entry(id: &str, date: &str, category: &str, amount: Amount) -> LedgerEntry {
        LedgerEntry {
            id: id.into(),
            owner_ref: "guest".into(),
            date_key: date.into(),
            category: category.into(),
            amount,
            description: "note".into(),
        }
    }

    // ========== format_amount() tests ==========

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(350.0), "350.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1_000_000.0), "1,000,000.00");
        assert_eq!(format_amount(-42.5), "-42.50");
    }

    // ========== render tests ==========

    #[test]
    fn test_render_stats() {
        let entries = vec![
            make_entry("a", "2024-03-01", "Food", Amount::Number(150.0)),
            make_entry("b", "2024-03-08", "Transport", Amount::Number(200.0)),
        ];
        let stats = compute_stats(&entries, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());

        let text = render_stats(&stats);

        assert!(text.contains("All time"));
        assert!(text.contains("350.00"));
        assert!(text.find("Transport").unwrap() < text.find("Food").unwrap());
        assert!(text.contains("[car]"));
        assert!(text.contains("Fri 2024-03-08"));
    }

    #[test]
    fn test_render_history_pluralizes() {
        let entries = vec![
            make_entry("a", "2024-03-01", "Food", Amount::Number(1.0)),
            make_entry("b", "2024-02-01", "Food", Amount::Number(1.0)),
            make_entry("c", "2024-02-02", "Food", Amount::Number(1.0)),
        ];
        let stats = compute_stats(&entries, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());

        let text = render_history(&stats.monthly_history);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("March 2024"));
        assert!(lines[0].ends_with("(1 entry)"));
        assert!(lines[1].ends_with("(2 entries)"));
    }

    #[test]
    fn test_render_entries_marks_invalid_amount() {
        let entry = make_entry("a", "2024-03-01", "Food", Amount::Text("??".into()));
        let text = render_entries(&[&entry]);
        assert!(text.contains("invalid"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_entries(&[]), "No entries\n");
        assert_eq!(render_history(&[]), "No entries\n");
    }
}
