use pms_core::{
    DailyPlannerItem, MemberRef, Project, Sprint, Task, User, UserRole, parse_date,
};

use uuid::Uuid;

pub fn create_test_user(email: &str, employee_code: &str) -> User {
    User::new(
        "Test User".to_string(),
        employee_code.to_string(),
        email,
        "plaintext-password".to_string(),
        UserRole::BackendDeveloper,
    )
}

pub fn create_test_project() -> Project {
    Project::new(
        "Test Project".to_string(),
        "Test project description".to_string(),
        parse_date("2025-01-01", "startDate").unwrap(),
        parse_date("2025-06-30", "endDate").unwrap(),
    )
}

pub fn create_test_sprint(project_id: Option<Uuid>) -> Sprint {
    let mut sprint = Sprint::new(
        "Sprint 1".to_string(),
        "First iteration".to_string(),
        parse_date("2025-01-01", "startDate").unwrap(),
        parse_date("2025-01-14", "endDate").unwrap(),
    );
    sprint.project_id = project_id;
    sprint
}

pub fn create_test_task(project_id: Uuid) -> Task {
    let mut task = Task::new("Test Task".to_string(), project_id);
    task.description = Some("Do the thing".to_string());
    task
}

pub fn create_test_daily_task(task_id: Uuid) -> DailyPlannerItem {
    DailyPlannerItem::new(
        "Test Task".to_string(),
        task_id,
        "Morning slot".to_string(),
    )
}

pub fn member(user_id: Uuid) -> MemberRef {
    MemberRef {
        user_id,
        name: Some("Member".to_string()),
        employee_code: Some("EMP100".to_string()),
        role: Some("QA".to_string()),
    }
}
