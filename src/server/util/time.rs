//! Time conversions between database columns and API values.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Database timestamps are stored as naive UTC.
pub fn to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    naive.and_utc()
}

pub fn now_naive() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// RFC 3339 UTC with millisecond precision, e.g. `2025-01-02T03:04:05.678Z`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
