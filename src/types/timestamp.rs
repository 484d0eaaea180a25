//! Timestamp parsing for entry frontmatter.
//!
//! Accepted forms, all resolved to UTC:
//! - RFC 3339 (`2024-01-01T10:00:00Z`, `2024-01-01T10:00:00+02:00`)
//! - naive date-time (`2024-01-01T10:00:00`, `2024-01-01 10:00:00`)
//! - bare date (`2024-01-01`), read as midnight

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid timestamp: {0:?}")]
pub struct TimestampError(pub String);

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimestampError(raw.to_string()))
}

/// Milliseconds since the epoch, the resolution visibility checks use.
pub fn epoch_millis(dt: &DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

/// Whole seconds since the epoch, floored. Ordering compares at this
/// resolution so sub-second differences collapse.
pub fn epoch_seconds(dt: &DateTime<Utc>) -> i64 {
    dt.timestamp()
}

/// `deserialize_with` adapter for required timestamp fields.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// `deserialize_with` adapter for optional timestamp fields.
pub(crate) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
    raw.map(|s| parse_timestamp(&s).map_err(serde::de::Error::custom))
        .transpose()
}
