use serde::Deserialize;

/// Request body for creating a user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub employee_code: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Plaintext; hashed before it is stored
    #[serde(default)]
    pub password: Option<String>,

    /// Defaults to "Frontend Developer"
    #[serde(default)]
    pub role: Option<String>,
}
