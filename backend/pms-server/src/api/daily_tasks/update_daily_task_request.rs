use crate::api::member_input::MemberInput;

use serde::Deserialize;

/// Request body for updating a daily planner item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDailyTaskRequest {
    #[serde(default)]
    pub task_name: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub task_id: Option<String>,

    #[serde(default)]
    pub assigned_users: Option<Vec<MemberInput>>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}
