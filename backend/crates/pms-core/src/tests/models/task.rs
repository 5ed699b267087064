use crate::{DailyPlannerItem, DailyPlannerStatus, Task, TaskPriority, TaskStatus};

use uuid::Uuid;

#[test]
fn test_task_new_defaults() {
    let project_id = Uuid::new_v4();
    let task = Task::new("Write docs".to_string(), project_id);

    assert_eq!(task.project_id, project_id);
    assert_eq!(task.status, TaskStatus::ToDo);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert!(task.sprint_id.is_none());
    assert!(task.start_date.is_none());
}

#[test]
fn test_task_references_user() {
    let assignee = Uuid::new_v4();
    let mut task = Task::new("Write docs".to_string(), Uuid::new_v4());
    assert!(!task.references_user(assignee));

    task.assigned_to.push(assignee);
    assert!(task.references_user(assignee));
}

#[test]
fn test_daily_planner_item_new_defaults() {
    let task_id = Uuid::new_v4();
    let item = DailyPlannerItem::new("Write docs".to_string(), task_id, "Intro".to_string());

    assert_eq!(item.task_id, task_id);
    assert_eq!(item.status, DailyPlannerStatus::Pending);
    assert_eq!(item.date, item.created_at);
    assert!(item.assigned_users.is_empty());
}
