//! Project entity - top-level container for sprints and tasks.

use crate::{CoreError, CoreResult, MemberRef, ProjectStatus};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: ProjectStatus,
    pub team_members: Vec<MemberRef>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with default status and no team
    pub fn new(
        name: String,
        description: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            start_date,
            end_date,
            status: ProjectStatus::default(),
            team_members: Vec::new(),
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// A project may not end before it starts.
    #[track_caller]
    pub fn validate_date_range(&self) -> CoreResult<()> {
        if self.end_date < self.start_date {
            return Err(CoreError::Validation {
                message: "endDate must not be before startDate".to_string(),
                field: Some("endDate".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    pub fn has_member(&self, user_id: Uuid) -> bool {
        self.team_members.iter().any(|m| m.user_id == user_id)
    }
}
