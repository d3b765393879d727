//! ServiceNow timestamp codec
//!
//! ServiceNow emits `sys_created_on` as `YYYY-MM-DD HH:MM:SS` without a zone.
//! The proxy in front of it may also hand back RFC 3339. Both are read as UTC.
//!
//! Use with `#[serde(with = "crate::domain::timestamp")]`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use super::error::{DomainError, Result};

/// Wire format used by the ServiceNow table API
pub const SERVICENOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a wire timestamp (ServiceNow or RFC 3339)
///
/// A zone-less value is taken as UTC, not as the caller's local time.
pub fn parse(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, SERVICENOW_FORMAT) {
        return Ok(naive.and_utc());
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::InvalidTimestamp(raw.to_string()))
}

/// Render a timestamp in the ServiceNow wire format
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(SERVICENOW_FORMAT).to_string()
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_servicenow_format() {
        let ts = parse("2024-11-05 14:30:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 11, 5, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = parse("2024-11-05T16:30:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 11, 5, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse("yesterday-ish").unwrap_err();
        assert!(err.to_string().contains("yesterday-ish"));
    }

    #[test]
    fn test_format_matches_wire() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format(&ts), "2023-01-02 03:04:05");
    }
}
