//! Parsing helpers shared by the API boundary and the store.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Parse a store identifier, naming `field` in the error.
#[track_caller]
pub fn parse_uuid(value: &str, field: &str) -> CoreResult<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|source| CoreError::Uuid {
        field: field.to_string(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Parse a date given either as an RFC 3339 timestamp or as a bare
/// `YYYY-MM-DD` calendar date (interpreted as midnight UTC).
#[track_caller]
pub fn parse_date(value: &str, field: &str) -> CoreResult<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(midnight) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(CoreError::Date {
        field: field.to_string(),
        value: value.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
