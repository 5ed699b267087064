//! Task REST API handlers

use crate::api::validation::{
    optional_date, optional_enum, optional_id, optional_text, parse_id, parse_path_id,
    required_text,
};
use crate::{
    ApiError, ApiResult, CreateTaskRequest, DeleteResponse, RequestScope, Store, TaskDto,
    TaskResponse, UpdateTaskRequest, ValidJson,
};

use pms_core::{Task, TaskPriority, TaskStatus};
use pms_db::TaskRepository;

use axum::{Json, extract::Path};
use chrono::Utc;
use uuid::Uuid;

/// GET /tasks?userId=&role=
///
/// Non-admin callers only see tasks assigned to them or created by them.
pub async fn list_tasks(
    Store(pool): Store,
    RequestScope(scope): RequestScope,
) -> ApiResult<Json<Vec<TaskDto>>> {
    let repo = TaskRepository::new(pool);
    let tasks = repo.find_visible_to(scope).await?;

    Ok(Json(tasks.into_iter().map(TaskDto::from).collect()))
}

/// GET /tasks/sprint/:sprint_id
pub async fn list_tasks_by_sprint(
    Store(pool): Store,
    Path(sprint_id): Path<String>,
) -> ApiResult<Json<Vec<TaskDto>>> {
    let sprint_id = parse_path_id(&sprint_id, "sprint")?;

    let repo = TaskRepository::new(pool);
    let tasks = repo.find_by_sprint(sprint_id).await?;

    Ok(Json(tasks.into_iter().map(TaskDto::from).collect()))
}

/// GET /tasks/project/:project_id
pub async fn list_tasks_by_project(
    Store(pool): Store,
    Path(project_id): Path<String>,
) -> ApiResult<Json<Vec<TaskDto>>> {
    let project_id = parse_path_id(&project_id, "project")?;

    let repo = TaskRepository::new(pool);
    let tasks = repo.find_by_project(project_id).await?;

    Ok(Json(tasks.into_iter().map(TaskDto::from).collect()))
}

/// GET /tasks/:id
pub async fn get_task(Store(pool): Store, Path(id): Path<String>) -> ApiResult<Json<TaskDto>> {
    let task_id = parse_path_id(&id, "task")?;

    let repo = TaskRepository::new(pool);
    let task = repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task"))?;

    Ok(Json(task.into()))
}

/// POST /tasks
pub async fn create_task(
    Store(pool): Store,
    ValidJson(req): ValidJson<CreateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    // 1. Required fields
    let title = required_text(req.title, "title")?;
    let project_id = required_text(req.project_id, "projectId")?;
    let project_id = parse_id(&project_id, "projectId")?;

    // 2. Optional fields
    let mut task = Task::new(title, project_id);
    task.description = optional_text(req.description);
    task.sprint_id = optional_id(req.sprint_id, "sprintId")?;
    task.assigned_to = parse_assignees(&req.assigned_to)?;
    if let Some(status) = optional_enum::<TaskStatus>(req.status, "status")? {
        task.status = status;
    }
    if let Some(priority) = optional_enum::<TaskPriority>(req.priority, "priority")? {
        task.priority = priority;
    }
    task.start_date = optional_date(req.start_date, "startDate")?;
    task.end_date = optional_date(req.end_date, "endDate")?;
    task.created_by = optional_id(req.created_by, "createdBy")?;

    // 3. Persist
    let repo = TaskRepository::new(pool);
    repo.create(&task).await?;

    log::info!("Created task {} ({})", task.id, task.title);

    Ok(Json(TaskResponse {
        message: "Task added successfully".to_string(),
        task: task.into(),
    }))
}

/// PUT /tasks/:id
pub async fn update_task(
    Store(pool): Store,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    // 1. Parse task ID
    let task_id = parse_path_id(&id, "task")?;

    // 2. Load existing task
    let repo = TaskRepository::new(pool);
    let mut task = repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task"))?;

    // 3. Apply updates
    if req.title.is_some() {
        task.title = required_text(req.title, "title")?;
    }
    if let Some(description) = req.description {
        task.description = optional_text(description);
    }
    if req.project_id.is_some() {
        let project_id = required_text(req.project_id, "projectId")?;
        task.project_id = parse_id(&project_id, "projectId")?;
    }
    if let Some(sprint_id) = req.sprint_id {
        task.sprint_id = optional_id(sprint_id, "sprintId")?;
    }
    if let Some(assignees) = req.assigned_to {
        task.assigned_to = parse_assignees(&assignees)?;
    }
    if let Some(status) = optional_enum::<TaskStatus>(req.status, "status")? {
        task.status = status;
    }
    if let Some(priority) = optional_enum::<TaskPriority>(req.priority, "priority")? {
        task.priority = priority;
    }
    if let Some(start) = req.start_date {
        task.start_date = optional_date(start, "startDate")?;
    }
    if let Some(end) = req.end_date {
        task.end_date = optional_date(end, "endDate")?;
    }
    task.updated_at = Utc::now();

    // 4. Persist
    if !repo.update(&task).await? {
        return Err(ApiError::not_found("Task"));
    }

    log::info!("Updated task {} ({})", task.id, task.title);

    Ok(Json(TaskResponse {
        message: "Task updated successfully".to_string(),
        task: task.into(),
    }))
}

/// DELETE /tasks/:id
pub async fn delete_task(
    Store(pool): Store,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = parse_path_id(&id, "task")?;

    let repo = TaskRepository::new(pool);
    if !repo.delete(task_id).await? {
        return Err(ApiError::not_found("Task"));
    }

    log::info!("Deleted task {}", task_id);

    Ok(Json(DeleteResponse::new("Task deleted successfully", task_id)))
}

fn parse_assignees(raw: &[String]) -> ApiResult<Vec<Uuid>> {
    raw.iter().map(|id| parse_id(id, "assignedTo")).collect()
}
