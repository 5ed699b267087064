use crate::TaskDto;

use serde::Serialize;

/// Response for task create/update
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub message: String,
    pub task: TaskDto,
}
