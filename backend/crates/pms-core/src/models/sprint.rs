use crate::{MemberRef, SprintStatus};

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprint {
    pub id: Uuid,
    pub sprint_name: String,
    pub description: String,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    pub status: SprintStatus,
    pub project_id: Option<Uuid>,
    pub assigned_users: Vec<MemberRef>,

    // Audit
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sprint {
    pub fn new(
        sprint_name: String,
        description: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            sprint_name,
            description,
            start_date,
            end_date,
            status: SprintStatus::default(),
            project_id: None,
            assigned_users: Vec::new(),
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// True if the sprint is assigned to, or was created by, `user_id`
    pub fn references_user(&self, user_id: Uuid) -> bool {
        self.created_by == Some(user_id) || self.assigned_users.iter().any(|m| m.user_id == user_id)
    }
}
