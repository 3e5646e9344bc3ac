//! Row conversion helpers shared by the query modules.

use std::str::FromStr;

use jiff::{civil::Date, Timestamp};
use rusqlite::{types::Type, Row};

/// Milliseconds since the epoch, the storage form of every instant.
pub(crate) fn to_millis(instant: Timestamp) -> i64 {
    instant.as_millisecond()
}

/// Drops sub-millisecond precision so a returned model equals its stored
/// row.
pub(crate) fn stored_instant(instant: Timestamp) -> Result<Timestamp, jiff::Error> {
    Timestamp::from_millisecond(to_millis(instant))
}

/// Reads an INTEGER id column.
pub(crate) fn id_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Reads an INTEGER millisecond column as a `Timestamp`.
pub(crate) fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    let millis: i64 = row.get(idx)?;
    Timestamp::from_millisecond(millis)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

/// Reads a TEXT `YYYY-MM-DD` column as a civil date.
pub(crate) fn date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(idx)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads a TEXT column holding one of the tag enums.
pub(crate) fn tag_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.into()))
}

/// Conversion failure for a column that must not be NULL in the current
/// row shape.
pub(crate) fn missing_column(idx: usize, what: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Null,
        format!("Missing {what} for this entry mode").into(),
    )
}
