use crate::{TaskPriority, TaskStatus};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A unit of work inside a project, optionally scheduled into a sprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub project_id: Uuid,
    pub sprint_id: Option<Uuid>,
    pub assigned_to: Vec<Uuid>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: String, project_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            project_id,
            sprint_id: None,
            assigned_to: Vec::new(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            start_date: None,
            end_date: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn references_user(&self, user_id: Uuid) -> bool {
        self.created_by == Some(user_id) || self.assigned_to.contains(&user_id)
    }
}
