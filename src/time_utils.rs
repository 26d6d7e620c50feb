// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date parsing and rendering.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a calendar date from client input.
///
/// Accepts `YYYY-MM-DD` or a full RFC3339 timestamp; any time-of-day
/// component is discarded.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Render a date the way the API reports it, e.g. "Sun Jan 15 2023".
pub fn format_date_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Today's UTC date, the default when an exercise omits its date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_date("2023-01-15"),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
    }

    #[test]
    fn test_parse_discards_time_of_day() {
        assert_eq!(
            parse_date("2023-01-15T14:30:00Z"),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert_eq!(
            parse_date("2023-01-15T23:59:59+00:00"),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("15-01-2023"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_format_date_string() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(format_date_string(date), "Sun Jan 15 2023");
    }

    #[test]
    fn test_format_zero_pads_day() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        assert_eq!(format_date_string(date), "Thu Jan 05 2023");
    }
}
