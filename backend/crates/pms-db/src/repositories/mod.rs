pub mod daily_task_repository;
pub mod project_repository;
pub mod sprint_repository;
pub mod task_repository;
pub mod user_repository;
