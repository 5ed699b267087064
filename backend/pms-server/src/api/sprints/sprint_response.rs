use crate::SprintDto;

use serde::Serialize;

/// Response for sprint create/update
#[derive(Debug, Serialize)]
pub struct SprintResponse {
    pub message: String,
    pub sprint: SprintDto,
}
