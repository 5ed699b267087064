use crate::{MemberRef, Sprint, SprintStatus};

use chrono::Utc;
use uuid::Uuid;

#[test]
fn test_sprint_new_defaults() {
    let now = Utc::now();
    let sprint = Sprint::new("Sprint 1".to_string(), "First".to_string(), now, now);

    assert_eq!(sprint.status, SprintStatus::Planning);
    assert!(sprint.project_id.is_none());
    assert!(sprint.assigned_users.is_empty());
}

#[test]
fn test_sprint_references_user() {
    let now = Utc::now();
    let assignee = Uuid::new_v4();
    let creator = Uuid::new_v4();
    let mut sprint = Sprint::new("Sprint 1".to_string(), "First".to_string(), now, now);
    sprint.assigned_users.push(MemberRef::new(assignee));
    sprint.created_by = Some(creator);

    assert!(sprint.references_user(assignee));
    assert!(sprint.references_user(creator));
    assert!(!sprint.references_user(Uuid::new_v4()));
}
