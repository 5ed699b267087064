//! Request field validation helpers
//!
//! Request bodies deserialize required fields as `Option` so that a missing
//! field is reported as a 400 naming that field instead of a generic JSON
//! rejection.

use crate::{ApiError, ApiResult};

use pms_core::{CoreError, parse_date, parse_uuid};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Trimmed, non-empty text or a "`<field>` is required" error
#[track_caller]
pub fn required_text(value: Option<String>, field: &str) -> ApiResult<String> {
    match optional_text(value) {
        Some(text) => Ok(text),
        None => Err(ApiError::Validation {
            message: format!("{} is required", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Trimmed text, with blank values treated as absent
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Identifier carried in a body field or query parameter
#[track_caller]
pub fn parse_id(raw: &str, field: &str) -> ApiResult<Uuid> {
    Ok(parse_uuid(raw, field)?)
}

/// Identifier in a path segment. `entity` names the resource in the
/// message ("Invalid project ID format").
#[track_caller]
pub fn parse_path_id(raw: &str, entity: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::Validation {
        message: format!("Invalid {} ID format", entity),
        field: Some("id".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub fn optional_id(raw: Option<String>, field: &str) -> ApiResult<Option<Uuid>> {
    optional_text(raw).map(|id| parse_id(&id, field)).transpose()
}

#[track_caller]
pub fn required_date(value: Option<String>, field: &str) -> ApiResult<DateTime<Utc>> {
    let raw = required_text(value, field)?;
    Ok(parse_date(&raw, field)?)
}

#[track_caller]
pub fn optional_date(value: Option<String>, field: &str) -> ApiResult<Option<DateTime<Utc>>> {
    optional_text(value)
        .map(|raw| parse_date(&raw, field).map_err(ApiError::from))
        .transpose()
}

/// Parse an enum wire value, attaching `field` to the error
#[track_caller]
pub fn parse_enum<T>(raw: &str, field: &str) -> ApiResult<T>
where
    T: FromStr<Err = CoreError>,
{
    T::from_str(raw.trim()).map_err(|e| ApiError::Validation {
        message: e.client_message(),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub fn optional_enum<T>(raw: Option<String>, field: &str) -> ApiResult<Option<T>>
where
    T: FromStr<Err = CoreError>,
{
    optional_text(raw)
        .map(|value| parse_enum(&value, field))
        .transpose()
}

/// Distinguishes an explicit `null` from an absent field in update bodies.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// absent → `None`, `null` → `Some(None)`, value → `Some(Some(value))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
