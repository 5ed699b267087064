//! Embedded snapshot of a user attached to a project, sprint or daily task.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user reference carried inside another document.
///
/// `name`, `employee_code` and `role` are copies taken when the member was
/// attached; they are not kept in sync with the user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    pub user_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl MemberRef {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            name: None,
            employee_code: None,
            role: None,
        }
    }
}
