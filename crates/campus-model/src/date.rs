//! Lenient ISO-8601 handling.
//!
//! Date-only fields accept either `YYYY-MM-DD` or a full date-time and keep
//! the date portion. Server timestamps accept a date-time with or without
//! fractional seconds or an offset, or a bare date (read as midnight).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse the date portion of an ISO-8601 string.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// Parse an ISO-8601 date-time, tolerating the shapes servers commonly emit.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    if trimmed.len() == 10 {
        return parse_date(trimmed).map(|date| date.and_time(NaiveTime::MIN));
    }
    None
}

/// Render a date as `YYYY-MM-DD`.
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Date portion of a timestamp, for display.
#[must_use]
pub fn display_timestamp_date(timestamp: NaiveDateTime) -> String {
    display_date(timestamp.date())
}

/// Serde adapter for `Option<NaiveDate>` date-only fields.
pub mod iso_date_opt {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&super::display_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => super::parse_date(text)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {text}"))),
        }
    }
}

/// Serde adapter for optional server-assigned timestamps.
///
/// Unparseable values decode as `None`; these fields are informational and
/// must never fail a record decode.
pub mod iso_timestamp_opt {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(super::TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_keeps_date_portion_of_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_date("2024-03-15"), expected);
        assert_eq!(parse_date("2024-03-15T10:30:00"), expected);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn timestamp_accepts_common_shapes() {
        assert!(parse_timestamp("2024-03-15T10:30:00").is_some());
        assert!(parse_timestamp("2024-03-15T10:30:00.123456").is_some());
        assert!(parse_timestamp("2024-03-15T10:30:00Z").is_some());
        assert!(parse_timestamp("2024-03-15").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn display_truncates_to_date() {
        let ts = parse_timestamp("2024-03-15T10:30:00").unwrap();
        assert_eq!(display_timestamp_date(ts), "2024-03-15");
    }
}
