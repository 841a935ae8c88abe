//! Date and time display formatting.

use chrono::{DateTime, Utc};

/// `YYYY-MM-DD HH:MM:SS`, as shown in list columns.
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Indexing column: the timestamp, or a fixed label for catalogs the
/// backend has never indexed.
pub fn format_indexed_at(indexed_at: Option<DateTime<Utc>>) -> String {
    match indexed_at {
        Some(ts) => format_datetime(ts),
        None => "Not indexed yet".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(ts), "2024-03-15 14:02:26");
    }

    #[test]
    fn test_format_indexed_at() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_indexed_at(Some(ts)), "2024-12-31 23:59:59");
        assert_eq!(format_indexed_at(None), "Not indexed yet");
    }
}
