pub mod access_scope;
pub mod error;
pub mod models;
pub mod parsing;

#[cfg(test)]
mod tests;

pub use access_scope::AccessScope;
pub use error::{CoreError, Result as CoreResult};
pub use models::daily_planner_item::DailyPlannerItem;
pub use models::daily_planner_status::DailyPlannerStatus;
pub use models::member_ref::MemberRef;
pub use models::project::Project;
pub use models::project_status::ProjectStatus;
pub use models::sprint::Sprint;
pub use models::sprint_status::SprintStatus;
pub use models::task::Task;
pub use models::task_priority::TaskPriority;
pub use models::task_status::TaskStatus;
pub use models::user::User;
pub use models::user_role::UserRole;
pub use parsing::{parse_date, parse_uuid};
