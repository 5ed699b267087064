//! Column decoding shared by the repositories.

use crate::{DbError, Result as DbErrorResult};

use pms_core::CoreError;

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use error_location::ErrorLocation;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
fn decode_error(message: String) -> DbError {
    DbError::Decode {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

pub(crate) fn uuid(row: &SqliteRow, table: &str, column: &str) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw)
        .map_err(|e| decode_error(format!("Invalid UUID in {}.{}: {}", table, column, e)))
}

pub(crate) fn optional_uuid(
    row: &SqliteRow,
    table: &str,
    column: &str,
) -> DbErrorResult<Option<Uuid>> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|s| {
        Uuid::parse_str(&s)
            .map_err(|e| decode_error(format!("Invalid UUID in {}.{}: {}", table, column, e)))
    })
    .transpose()
}

/// Storage form of a timestamp: fixed-width RFC 3339 with nanoseconds, so
/// values round-trip exactly and sort chronologically as text.
pub(crate) fn db_time(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_time(raw: &str, table: &str, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| decode_error(format!("Invalid timestamp in {}.{}: {}", table, column, e)))
}

pub(crate) fn timestamp(
    row: &SqliteRow,
    table: &str,
    column: &str,
) -> DbErrorResult<DateTime<Utc>> {
    let raw: String = row.try_get(column)?;
    parse_time(&raw, table, column)
}

pub(crate) fn optional_timestamp(
    row: &SqliteRow,
    table: &str,
    column: &str,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|ts| parse_time(&ts, table, column)).transpose()
}

pub(crate) fn enum_value<T>(row: &SqliteRow, table: &str, column: &str) -> DbErrorResult<T>
where
    T: FromStr<Err = CoreError>,
{
    let raw: String = row.try_get(column)?;
    T::from_str(&raw).map_err(|e| decode_error(format!("{} in {}.{}", e, table, column)))
}

pub(crate) fn json<T: DeserializeOwned>(
    row: &SqliteRow,
    table: &str,
    column: &str,
) -> DbErrorResult<T> {
    let raw: String = row.try_get(column)?;
    serde_json::from_str(&raw)
        .map_err(|e| decode_error(format!("Invalid JSON in {}.{}: {}", table, column, e)))
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> DbErrorResult<String> {
    Ok(serde_json::to_string(value)?)
}
