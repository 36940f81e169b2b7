//! ISO week numbering

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// ISO week of a date, together with the year that owns it.
///
/// The owning year is the year of the week's Thursday, so it can differ from
/// the calendar year: 2023-01-01 is in week 52 of 2022, 2024-12-30 is in week 1
/// of 2025. Two dates are in the same week only if both fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IsoWeek {
    pub year: i32,
    pub week: u32,
}

impl IsoWeek {
    pub fn of(date: NaiveDate) -> Self {
        // Monday = 1 ... Sunday = 7
        let weekday = i64::from(date.weekday().number_from_monday());
        // Only fails at the ends of chrono's date range
        let thursday = date
            .checked_add_signed(Duration::days(4 - weekday))
            .unwrap_or(date);

        // ceil((days since Jan 1 + 1) / 7)
        let week = thursday.ordinal0() / 7 + 1;

        Self {
            year: thursday.year(),
            week,
        }
    }

    /// `YYYY-Www`, e.g. `2024-W09`
    pub fn period_key(&self) -> String {
        format!("{:04}-W{:02}", self.year, self.week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week_of(y: i32, m: u32, d: u32) -> IsoWeek {
        IsoWeek::of(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_mid_year() {
        assert_eq!(week_of(2024, 3, 8), IsoWeek { year: 2024, week: 10 });
    }

    #[test]
    fn test_sunday_new_year_belongs_to_previous_year() {
        // 2023-01-01 is a Sunday
        assert_eq!(week_of(2023, 1, 1), IsoWeek { year: 2022, week: 52 });
    }

    #[test]
    fn test_late_december_belongs_to_next_year() {
        assert_eq!(week_of(2024, 12, 30), IsoWeek { year: 2025, week: 1 });
        assert_eq!(week_of(2024, 12, 29), IsoWeek { year: 2024, week: 52 });
    }

    #[test]
    fn test_week_53() {
        assert_eq!(week_of(2020, 12, 31), IsoWeek { year: 2020, week: 53 });
        assert_eq!(week_of(2021, 1, 3), IsoWeek { year: 2020, week: 53 });
    }

    #[test]
    fn test_same_week_number_different_year_is_not_same_week() {
        let start = week_of(2023, 1, 1);
        let end = week_of(2023, 12, 31);
        assert_eq!(start.week, end.week);
        assert_ne!(start, end);
    }

    #[test]
    fn test_matches_chrono_iso_week() {
        let mut date = NaiveDate::from_ymd_opt(1999, 12, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2031, 1, 31).unwrap();
        while date <= end {
            let ours = IsoWeek::of(date);
            let theirs = date.iso_week();
            assert_eq!(ours.year, theirs.year(), "year mismatch for {date}");
            assert_eq!(ours.week, theirs.week(), "week mismatch for {date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_is_pure() {
        assert_eq!(week_of(2026, 1, 1), week_of(2026, 1, 1));
    }

    #[test]
    fn test_period_key_padding() {
        assert_eq!(week_of(2024, 2, 28).period_key(), "2024-W09");
        assert_eq!(week_of(2023, 1, 1).period_key(), "2022-W52");
    }

    #[test]
    fn test_monday_to_sunday_share_week() {
        let week = week_of(2024, 3, 8);
        assert_eq!(week_of(2024, 3, 4), week);
        assert_eq!(week_of(2024, 3, 10), week);
        assert_ne!(week_of(2024, 3, 11), week);
    }
}
