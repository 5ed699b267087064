use crate::api::member_input::MemberInput;

use serde::Deserialize;

/// Request body for creating a daily planner item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyTaskRequest {
    #[serde(default)]
    pub task_name: Option<String>,

    /// Defaults to the time of creation
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub task_id: Option<String>,

    #[serde(default)]
    pub assigned_users: Vec<MemberInput>,

    #[serde(default)]
    pub description: Option<String>,

    /// "Pending", "In Progress" or "Completed"
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub created_by: Option<String>,
}
