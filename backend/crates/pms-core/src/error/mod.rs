use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid {kind}: '{value}' (valid values: {valid}) {location}")]
    InvalidEnumValue {
        kind: &'static str,
        value: String,
        valid: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid {field} format: {source} {location}")]
    Uuid {
        field: String,
        #[source]
        source: uuid::Error,
        location: ErrorLocation,
    },

    #[error("Invalid {field} date '{value}': expected RFC 3339 or YYYY-MM-DD {location}")]
    Date {
        field: String,
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Name of the offending input field, when known
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidEnumValue { .. } => None,
            Self::Uuid { field, .. } | Self::Date { field, .. } => Some(field),
        }
    }

    /// Message without the trailing source location, suitable for clients
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidEnumValue {
                kind, value, valid, ..
            } => format!("Invalid {kind}: '{value}'. Valid values: {valid}"),
            Self::Uuid { field, .. } => format!("Invalid {field} format"),
            Self::Date { field, value, .. } => {
                format!("Invalid {field} '{value}': expected RFC 3339 or YYYY-MM-DD")
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
