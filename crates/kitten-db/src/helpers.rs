//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing and formatting of stored text
//! columns. Timestamps are written as fixed-width RFC 3339 with millisecond
//! precision so that `ORDER BY measurement_date` sorts chronologically.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::DatabaseError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a timestamp the way every repo stores it, e.g. `2024-05-25T07:00:00.000Z`.
#[must_use]
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.000Z"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`), since rows may be written by hand.
///
/// # Errors
///
/// Returns `DatabaseError::DataIntegrity` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::DataIntegrity(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<NaiveDate>`.
///
/// # Errors
///
/// Returns `DatabaseError::DataIntegrity` if a non-empty string is not `YYYY-MM-DD`.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|e| DatabaseError::DataIntegrity(format!("Failed to parse date '{s}': {e}"))),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with the kitten-core enums, whose serde names are the stored strings.
///
/// # Errors
///
/// Returns `DatabaseError::DataIntegrity` if the string matches no variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::DataIntegrity(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Convert an optional value into a SQL parameter, `NULL` for `None`.
pub fn opt_value<T: Into<libsql::Value>>(value: Option<T>) -> libsql::Value {
    value.map_or(libsql::Value::Null, Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kitten_core::enums::KittenStatus;

    #[test]
    fn datetime_roundtrips_through_storage_format() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 25, 7, 0, 0).unwrap();
        let stored = format_datetime(dt);
        assert_eq!(stored, "2024-05-25T07:00:00.000Z");
        assert_eq!(parse_datetime(&stored).unwrap(), dt);
    }

    #[test]
    fn parses_sqlite_default_format() {
        let dt = parse_datetime("2024-05-25 07:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 5, 25, 7, 0, 0).unwrap());
    }

    #[test]
    fn malformed_datetime_is_data_integrity_error() {
        assert!(matches!(
            parse_datetime("yesterday-ish"),
            Err(DatabaseError::DataIntegrity(_))
        ));
    }

    #[test]
    fn optional_date_parsing() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert_eq!(
            parse_optional_date(Some("2024-05-01")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
        assert!(parse_optional_date(Some("05/01/2024")).is_err());
    }

    #[test]
    fn enum_parsing_uses_stored_names() {
        let status: KittenStatus = parse_enum("Medical Hold").unwrap();
        assert_eq!(status, KittenStatus::MedicalHold);
        assert!(parse_enum::<KittenStatus>("medical_hold").is_err());
    }

    #[test]
    fn stored_timestamps_sort_lexically() {
        let early = format_datetime(Utc.with_ymd_and_hms(2024, 5, 25, 9, 0, 0).unwrap());
        let late = format_datetime(
            Utc.with_ymd_and_hms(2024, 5, 25, 10, 0, 0).unwrap() + chrono::Duration::milliseconds(5),
        );
        assert!(early < late);
    }
}
