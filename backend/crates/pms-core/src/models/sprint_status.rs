use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SprintStatus {
    #[default]
    #[serde(rename = "Planning")]
    Planning,
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl SprintStatus {
    pub const VALID_VALUES: &'static str = "Planning, Active, Completed, On Hold";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }
}

impl FromStr for SprintStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Planning" => Ok(Self::Planning),
            "Active" => Ok(Self::Active),
            "Completed" => Ok(Self::Completed),
            "On Hold" => Ok(Self::OnHold),
            _ => Err(CoreError::InvalidEnumValue {
                kind: "sprint status",
                value: s.to_string(),
                valid: Self::VALID_VALUES,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
