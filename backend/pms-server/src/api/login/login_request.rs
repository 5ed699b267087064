use serde::Deserialize;

/// Request body for POST /login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}
