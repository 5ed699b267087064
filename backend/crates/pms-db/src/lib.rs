pub mod connection;
pub mod error;
pub mod introspection;
pub mod repositories;
mod row_mapping;

pub use connection::{MIGRATOR, connect, run_migrations};
pub use error::{DbError, Result};
pub use introspection::{DatabaseStats, collect_stats, ping};
pub use repositories::daily_task_repository::DailyTaskRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::sprint_repository::SprintRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::UserRepository;
