use crate::ProjectDto;

use serde::Serialize;

/// Response for project create/update
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub message: String,
    pub project: ProjectDto,
}
