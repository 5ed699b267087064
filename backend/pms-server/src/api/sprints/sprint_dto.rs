use pms_core::{MemberRef, Sprint};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Sprint DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub sprint_name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub project_id: Option<Uuid>,
    pub assigned_users: Vec<MemberRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Sprint> for SprintDto {
    fn from(s: Sprint) -> Self {
        Self {
            id: s.id,
            sprint_name: s.sprint_name,
            description: s.description,
            start_date: s.start_date,
            end_date: s.end_date,
            status: s.status.as_str().to_string(),
            project_id: s.project_id,
            assigned_users: s.assigned_users,
            created_by: s.created_by,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
