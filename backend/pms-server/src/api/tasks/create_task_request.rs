use serde::Deserialize;

/// Request body for creating a task
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub sprint_id: Option<String>,

    /// User ids
    #[serde(default)]
    pub assigned_to: Vec<String>,

    /// "To Do", "In Progress", "Review" or "Done"
    #[serde(default)]
    pub status: Option<String>,

    /// "Low", "Medium" or "High"
    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub created_by: Option<String>,
}
