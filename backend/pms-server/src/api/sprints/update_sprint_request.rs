use crate::api::member_input::MemberInput;
use crate::api::validation::double_option;

use serde::Deserialize;

/// Request body for updating a sprint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSprintRequest {
    #[serde(default)]
    pub sprint_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// `null` detaches the sprint from its project
    #[serde(default, deserialize_with = "double_option")]
    pub project_id: Option<Option<String>>,

    #[serde(default)]
    pub assigned_users: Option<Vec<MemberInput>>,
}
