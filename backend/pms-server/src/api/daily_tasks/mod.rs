pub mod create_daily_task_request;
pub mod daily_task_dto;
pub mod daily_task_response;
#[allow(clippy::module_inception)]
pub mod daily_tasks;
pub mod update_daily_task_request;
