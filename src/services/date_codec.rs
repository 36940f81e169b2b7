//! Date key encoding and decoding
//!
//! A date key is a `YYYY-MM-DD` string built from local calendar fields. It
//! never goes through a UTC conversion, so "today" encodes to the same key no
//! matter what time of day it is.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// Encode a calendar date as `YYYY-MM-DD`
pub fn encode(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Encode a timestamp by its own local calendar fields
pub fn encode_local<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    encode(timestamp.date_naive())
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_key() -> String {
    encode(today())
}

/// Decode a date key.
///
/// Only the first 10 characters are read, so `2024-03-01T09:30:00Z` decodes to
/// 2024-03-01. Returns `None` for empty keys, non-numeric fields and dates that
/// don't exist on the calendar.
pub fn decode(key: &str) -> Option<NaiveDate> {
    let prefix = match key.char_indices().nth(10) {
        Some((idx, _)) => &key[..idx],
        None => key,
    };

    let mut fields = prefix.split('-');
    let year = fields.next()?.parse::<i32>().ok()?;
    let month = fields.next()?.parse::<u32>().ok()?;
    let day = fields.next()?.parse::<u32>().ok()?;
    if fields.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Decode a date key, substituting `fallback` when it can't be read
pub fn decode_or(key: &str, fallback: NaiveDate) -> NaiveDate {
    decode(key).unwrap_or_else(|| {
        tracing::warn!(date_key = key, %fallback, "unreadable date key, using fallback date");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ========== encode() tests ==========

    #[test]
    fn test_encode_zero_pads() {
        assert_eq!(encode(date(2024, 3, 1)), "2024-03-01");
        assert_eq!(encode(date(987, 12, 31)), "0987-12-31");
    }

    #[test]
    fn test_encode_local_uses_local_fields() {
        // 2024-03-08 23:30 at +05:30 is still 2024-03-08 18:00 UTC, but
        // 00:30 on the 9th at +05:30 is the 8th in UTC.
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let late = ist.with_ymd_and_hms(2024, 3, 8, 23, 30, 0).unwrap();
        let early = ist.with_ymd_and_hms(2024, 3, 9, 0, 30, 0).unwrap();

        assert_eq!(encode_local(&late), "2024-03-08");
        assert_eq!(encode_local(&early), "2024-03-09");
    }

    #[test]
    fn test_today_key_matches_today() {
        assert_eq!(decode(&today_key()), Some(today()));
    }

    // ========== decode() tests ==========

    #[test]
    fn test_decode_plain_key() {
        assert_eq!(decode("2024-03-08"), Some(date(2024, 3, 8)));
    }

    #[test]
    fn test_decode_ignores_time_suffix() {
        assert_eq!(decode("2024-03-08T22:15:00.000Z"), Some(date(2024, 3, 8)));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), None);
    }

    #[test]
    fn test_decode_impossible_date() {
        assert_eq!(decode("2023-02-29"), None);
        assert_eq!(decode("2024-13-01"), None);
    }

    #[test]
    fn test_decode_garbage() {
        assert_eq!(decode("yesterday"), None);
        assert_eq!(decode("2024-03"), None);
    }

    #[test]
    fn test_decode_multibyte_input_does_not_panic() {
        assert_eq!(decode("２０２４-03-08"), None);
    }

    #[test]
    fn test_round_trip() {
        let d = date(2024, 2, 29);
        assert_eq!(decode(&encode(d)), Some(d));
    }

    // ========== decode_or() tests ==========

    #[test]
    fn test_decode_or_uses_fallback() {
        let anchor = date(2024, 3, 8);
        assert_eq!(decode_or("", anchor), anchor);
        assert_eq!(decode_or("2024-03-01", anchor), date(2024, 3, 1));
    }
}
