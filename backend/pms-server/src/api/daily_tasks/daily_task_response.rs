use crate::DailyTaskDto;

use serde::Serialize;

/// Response for daily planner item create/update
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTaskResponse {
    pub message: String,
    pub daily_task: DailyTaskDto,
}
