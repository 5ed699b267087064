use crate::api::validation::double_option;

use serde::Deserialize;

/// Request body for updating a task.
///
/// Nullable fields accept an explicit `null` to clear the stored value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub sprint_id: Option<Option<String>>,

    #[serde(default)]
    pub assigned_to: Option<Vec<String>>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<String>>,
}
