use crate::api::member_input::MemberInput;

use serde::Deserialize;

/// Request body for creating a project
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// RFC 3339 timestamp or YYYY-MM-DD
    #[serde(default)]
    pub start_date: Option<String>,

    /// RFC 3339 timestamp or YYYY-MM-DD
    #[serde(default)]
    pub end_date: Option<String>,

    /// Defaults to "Not Started"
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub team_members: Vec<MemberInput>,

    #[serde(default)]
    pub created_by: Option<String>,
}
