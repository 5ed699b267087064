use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role stored on a user record. Only `Admin` carries extra privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserRole {
    #[serde(rename = "Admin")]
    Admin,
    #[default]
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "QA")]
    Qa,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
}

impl UserRole {
    pub const VALID_VALUES: &'static str =
        "Admin, Frontend Developer, Backend Developer, QA, Project Manager, UI/UX Designer";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::FrontendDeveloper => "Frontend Developer",
            Self::BackendDeveloper => "Backend Developer",
            Self::Qa => "QA",
            Self::ProjectManager => "Project Manager",
            Self::UiUxDesigner => "UI/UX Designer",
        }
    }

    pub fn is_admin(&self) -> bool {
        *self == Self::Admin
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Frontend Developer" => Ok(Self::FrontendDeveloper),
            "Backend Developer" => Ok(Self::BackendDeveloper),
            "QA" => Ok(Self::Qa),
            "Project Manager" => Ok(Self::ProjectManager),
            "UI/UX Designer" => Ok(Self::UiUxDesigner),
            _ => Err(CoreError::InvalidEnumValue {
                kind: "role",
                value: s.to_string(),
                valid: Self::VALID_VALUES,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
