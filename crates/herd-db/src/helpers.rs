//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the several
//! datetime formats found in livestock records (RFC 3339 written by Herd,
//! SQLite's `datetime('now')`, and fractional-second and date-only values
//! from imported spreadsheets).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::DatabaseError;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Naive values are taken as UTC.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches no known format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
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

/// Read a nullable TEXT column holding a timestamp.
///
/// # Errors
///
/// Returns `DatabaseError` if the read fails or the value is not a timestamp.
pub fn get_opt_datetime(
    row: &libsql::Row,
    idx: i32,
) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    parse_optional_datetime(get_opt_string(row, idx)?.as_deref())
}

/// Convert a SQL `COUNT(*)` into an unsigned count.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for a negative count.
pub fn count_from_sql(count: i64) -> Result<u64, DatabaseError> {
    u64::try_from(count)
        .map_err(|_| DatabaseError::InvalidState(format!("negative row count {count}")))
}
