use serde::Deserialize;

/// Request body for updating a user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub employee_code: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// A blank password leaves the current one in place
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
}
