//! Row parsing helpers.

use chrono::NaiveDate;

use crate::error::DatabaseError;

/// Parse a `DATE` column stored as TEXT (`"2026-10-18"`).
///
/// Also accepts a full `SQLite` timestamp (`"2026-10-18 14:30:00"`) and keeps
/// only the date part.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not a date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    let date_part = s.split_once(' ').map_or(s, |(date, _)| date);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Detect a collision on `daily_sentences.content_hash`.
///
/// libSQL reports constraint failures only through the message text. Other
/// UNIQUE failures, such as an `id` clash, do not match.
pub fn is_duplicate_content_hash(e: &libsql::Error) -> bool {
    e.to_string()
        .contains("UNIQUE constraint failed: daily_sentences.content_hash")
}

/// Read a `COUNT(*)`-style INTEGER column as `u64`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for a negative count.
pub fn get_count(row: &libsql::Row, idx: i32) -> Result<u64, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u64::try_from(raw).map_err(|_| DatabaseError::Query(format!("negative count: {raw}")))
}
