use pms_core::User;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// User DTO for JSON serialization. Carries no password field at all.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub employee_code: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            employee_code: u.employee_code,
            email: u.email,
            role: u.role.as_str().to_string(),
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
