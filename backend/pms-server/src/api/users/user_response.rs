use crate::UserDto;

use serde::Serialize;

/// Response for user create/update
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: String,
    pub user: UserDto,
}
