use serde::Serialize;
use uuid::Uuid;

/// Response body for DELETE endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_id: Uuid,
}

impl DeleteResponse {
    pub fn new(message: &str, deleted_id: Uuid) -> Self {
        Self {
            message: message.to_string(),
            deleted_id,
        }
    }
}
