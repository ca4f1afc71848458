/// Utilities for date formatting
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Normalise a timestamp or date to the calendar day `YYYY-MM-DD`.
///
/// RFC 3339 timestamps are converted to UTC first, so the day is the UTC day.
/// Timestamps without an offset keep the day as written.
/// Unparseable input is returned unchanged.
///
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn calendar_day(value: &str) -> String {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.with_timezone(&Utc).date_naive().format("%Y-%m-%d").to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return dt.date().format("%Y-%m-%d").to_string();
        }
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(d) => d.format("%Y-%m-%d").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_day_from_timestamps() {
        assert_eq!(calendar_day("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(calendar_day("2024-03-15T23:30:00-05:00"), "2024-03-16");
        assert_eq!(calendar_day("2024-03-16T01:00:00+05:00"), "2024-03-15");
        assert_eq!(calendar_day("2024-03-15T08:00:00"), "2024-03-15");
        assert_eq!(calendar_day("2024-03-15 08:00:00.5"), "2024-03-15");
    }

    #[test]
    fn test_calendar_day_from_date() {
        assert_eq!(calendar_day("2024-12-31"), "2024-12-31");
        assert_eq!(calendar_day(" 2024-01-02 "), "2024-01-02");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(calendar_day("invalid"), "invalid");
        assert_eq!(calendar_day(""), "");
    }
}
