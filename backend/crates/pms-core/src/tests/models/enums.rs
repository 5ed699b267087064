use crate::{
    DailyPlannerStatus, ProjectStatus, SprintStatus, TaskPriority, TaskStatus, UserRole,
};

use std::str::FromStr;

#[test]
fn test_user_role_round_trips_wire_values() {
    for role in [
        UserRole::Admin,
        UserRole::FrontendDeveloper,
        UserRole::BackendDeveloper,
        UserRole::Qa,
        UserRole::ProjectManager,
        UserRole::UiUxDesigner,
    ] {
        assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_user_role_default_and_admin() {
    assert_eq!(UserRole::default(), UserRole::FrontendDeveloper);
    assert!(UserRole::Admin.is_admin());
    assert!(!UserRole::Qa.is_admin());
}

#[test]
fn test_user_role_rejects_wrong_case() {
    assert!(UserRole::from_str("admin").is_err());
    assert!(UserRole::from_str("").is_err());
}

#[test]
fn test_user_role_serializes_with_spaces() {
    let json = serde_json::to_string(&UserRole::UiUxDesigner).unwrap();
    assert_eq!(json, "\"UI/UX Designer\"");
}

#[test]
fn test_project_status_values() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::NotStarted);
    assert_eq!(ProjectStatus::NotStarted.as_str(), "Not Started");
    assert_eq!(
        ProjectStatus::from_str("On Hold").unwrap(),
        ProjectStatus::OnHold
    );
    assert!(ProjectStatus::from_str("Archived").is_err());
}

#[test]
fn test_sprint_status_values() {
    assert_eq!(SprintStatus::default(), SprintStatus::Planning);
    assert_eq!(SprintStatus::from_str("Active").unwrap(), SprintStatus::Active);
    assert_eq!(SprintStatus::OnHold.to_string(), "On Hold");
    assert!(SprintStatus::from_str("active").is_err());
}

#[test]
fn test_task_status_and_priority_values() {
    assert_eq!(TaskStatus::default(), TaskStatus::ToDo);
    assert_eq!(TaskStatus::ToDo.as_str(), "To Do");
    assert_eq!(TaskStatus::from_str("Review").unwrap(), TaskStatus::Review);

    assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    assert_eq!(TaskPriority::from_str("High").unwrap(), TaskPriority::High);
    assert!(TaskPriority::from_str("Urgent").is_err());
}

#[test]
fn test_daily_planner_status_values() {
    assert_eq!(DailyPlannerStatus::default(), DailyPlannerStatus::Pending);
    assert_eq!(
        DailyPlannerStatus::from_str("In Progress").unwrap(),
        DailyPlannerStatus::InProgress
    );
}

#[test]
fn test_invalid_enum_error_lists_valid_values() {
    let err = TaskStatus::from_str("Blocked").unwrap_err();
    let message = err.client_message();
    assert!(message.contains("Blocked"));
    assert!(message.contains("To Do, In Progress, Review, Done"));
}
