use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "Completed")]
    Completed,
}

impl ProjectStatus {
    pub const VALID_VALUES: &'static str = "Not Started, In Progress, On Hold, Completed";

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Not Started" => Ok(Self::NotStarted),
            "In Progress" => Ok(Self::InProgress),
            "On Hold" => Ok(Self::OnHold),
            "Completed" => Ok(Self::Completed),
            _ => Err(CoreError::InvalidEnumValue {
                kind: "project status",
                value: s.to_string(),
                valid: Self::VALID_VALUES,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
