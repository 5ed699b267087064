pub mod daily_planner_item;
pub mod daily_planner_status;
pub mod member_ref;
pub mod project;
pub mod project_status;
pub mod sprint;
pub mod sprint_status;
pub mod task;
pub mod task_priority;
pub mod task_status;
pub mod user;
pub mod user_role;
