//! Daily planner entry - a dated slice of work against a task.

use crate::{DailyPlannerStatus, MemberRef};

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPlannerItem {
    pub id: Uuid,
    pub task_name: String,
    pub date: DateTime<Utc>,
    pub task_id: Uuid,
    pub assigned_users: Vec<MemberRef>,
    pub description: String,
    pub status: DailyPlannerStatus,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyPlannerItem {
    /// New entry dated now, in `Pending` status
    pub fn new(task_name: String, task_id: Uuid, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            task_name,
            date: now,
            task_id,
            assigned_users: Vec::new(),
            description,
            status: DailyPlannerStatus::default(),
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn references_user(&self, user_id: Uuid) -> bool {
        self.created_by == Some(user_id) || self.assigned_users.iter().any(|m| m.user_id == user_id)
    }
}
