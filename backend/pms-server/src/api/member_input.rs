use crate::ApiResult;
use crate::api::validation::{optional_text, parse_id};

use pms_core::MemberRef;

use serde::Deserialize;

/// A member entry in `teamMembers` / `assignedUsers` as sent by clients
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInput {
    pub user_id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub employee_code: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
}

impl MemberInput {
    /// Parse the member's id, naming `field` (the enclosing array) on failure
    #[track_caller]
    pub fn into_member(self, field: &str) -> ApiResult<MemberRef> {
        Ok(MemberRef {
            user_id: parse_id(&self.user_id, field)?,
            name: optional_text(self.name),
            employee_code: optional_text(self.employee_code),
            role: optional_text(self.role),
        })
    }
}

/// Convert a whole member array, failing on the first malformed id
pub fn into_members(inputs: Vec<MemberInput>, field: &str) -> ApiResult<Vec<MemberRef>> {
    inputs
        .into_iter()
        .map(|input| input.into_member(field))
        .collect()
}
