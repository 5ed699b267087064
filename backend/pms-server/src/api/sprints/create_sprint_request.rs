use crate::api::member_input::MemberInput;

use serde::Deserialize;

/// Request body for creating a sprint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSprintRequest {
    #[serde(default)]
    pub sprint_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    /// Sprint status: "Planning", "Active", "Completed" or "On Hold"
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub assigned_users: Vec<MemberInput>,

    #[serde(default)]
    pub created_by: Option<String>,
}
