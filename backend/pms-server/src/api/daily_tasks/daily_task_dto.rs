use pms_core::{DailyPlannerItem, MemberRef};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Daily planner item DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTaskDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub task_name: String,
    pub date: DateTime<Utc>,
    pub task_id: Uuid,
    pub assigned_users: Vec<MemberRef>,
    pub description: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DailyPlannerItem> for DailyTaskDto {
    fn from(d: DailyPlannerItem) -> Self {
        Self {
            id: d.id,
            task_name: d.task_name,
            date: d.date,
            task_id: d.task_id,
            assigned_users: d.assigned_users,
            description: d.description,
            status: d.status.as_str().to_string(),
            created_by: d.created_by,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}
