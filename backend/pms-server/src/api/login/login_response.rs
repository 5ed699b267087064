use serde::Serialize;
use uuid::Uuid;

/// Successful login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    /// Same value as `role`; older clients read this key
    pub user_type: String,
    pub role: String,
    pub name: String,
    pub email: String,
    pub user_id: Uuid,
    pub employee_code: String,
    /// Session token, present only when session tokens are enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
