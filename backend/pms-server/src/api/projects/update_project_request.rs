use crate::api::member_input::MemberInput;

use serde::Deserialize;

/// Request body for updating a project. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// Replaces the whole member list when present
    #[serde(default)]
    pub team_members: Option<Vec<MemberInput>>,
}
