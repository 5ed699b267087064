use crate::{MemberRef, Project, ProjectStatus, parse_date};

use uuid::Uuid;

fn project(start: &str, end: &str) -> Project {
    Project::new(
        "Apollo".to_string(),
        "Moon shot".to_string(),
        parse_date(start, "startDate").unwrap(),
        parse_date(end, "endDate").unwrap(),
    )
}

#[test]
fn test_project_new() {
    let project = project("2025-01-01", "2025-03-01");

    assert_eq!(project.name, "Apollo");
    assert_eq!(project.status, ProjectStatus::NotStarted);
    assert!(project.team_members.is_empty());
    assert!(project.created_by.is_none());
    assert_eq!(project.created_at, project.updated_at);
}

#[test]
fn test_project_date_range_accepts_same_day() {
    assert!(project("2025-01-01", "2025-01-01").validate_date_range().is_ok());
}

#[test]
fn test_project_date_range_rejects_end_before_start() {
    let err = project("2025-03-01", "2025-01-01")
        .validate_date_range()
        .unwrap_err();
    assert_eq!(err.field(), Some("endDate"));
}

#[test]
fn test_project_has_member() {
    let member = Uuid::new_v4();
    let mut project = project("2025-01-01", "2025-02-01");
    assert!(!project.has_member(member));

    project.team_members.push(MemberRef::new(member));
    assert!(project.has_member(member));
}
