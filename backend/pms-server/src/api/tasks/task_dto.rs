use pms_core::Task;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Task DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub project_id: Uuid,
    pub sprint_id: Option<Uuid>,
    pub assigned_to: Vec<Uuid>,
    pub status: String,
    pub priority: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            project_id: t.project_id,
            sprint_id: t.sprint_id,
            assigned_to: t.assigned_to,
            status: t.status.as_str().to_string(),
            priority: t.priority.as_str().to_string(),
            start_date: t.start_date,
            end_date: t.end_date,
            created_by: t.created_by,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
