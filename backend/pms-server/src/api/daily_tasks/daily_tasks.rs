//! Daily planner REST API handlers

use crate::api::member_input::into_members;
use crate::api::validation::{
    optional_date, optional_enum, optional_id, parse_id, parse_path_id, required_text,
};
use crate::{
    ApiError, ApiResult, CreateDailyTaskRequest, DailyTaskDto, DailyTaskResponse, DeleteResponse,
    RequestScope, Store, UpdateDailyTaskRequest, ValidJson,
};

use pms_core::{DailyPlannerItem, DailyPlannerStatus};
use pms_db::DailyTaskRepository;

use axum::{Json, extract::Path};
use chrono::Utc;

/// GET /daily-tasks?userId=&role=
pub async fn list_daily_tasks(
    Store(pool): Store,
    RequestScope(scope): RequestScope,
) -> ApiResult<Json<Vec<DailyTaskDto>>> {
    let repo = DailyTaskRepository::new(pool);
    let items = repo.find_visible_to(scope).await?;

    Ok(Json(items.into_iter().map(DailyTaskDto::from).collect()))
}

/// GET /daily-tasks/:id
pub async fn get_daily_task(
    Store(pool): Store,
    Path(id): Path<String>,
) -> ApiResult<Json<DailyTaskDto>> {
    let item_id = parse_path_id(&id, "daily task")?;

    let repo = DailyTaskRepository::new(pool);
    let item = repo
        .find_by_id(item_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Daily task"))?;

    Ok(Json(item.into()))
}

/// POST /daily-tasks
pub async fn create_daily_task(
    Store(pool): Store,
    ValidJson(req): ValidJson<CreateDailyTaskRequest>,
) -> ApiResult<Json<DailyTaskResponse>> {
    // 1. Required fields
    let task_name = required_text(req.task_name, "taskName")?;
    let task_id = required_text(req.task_id, "taskId")?;
    let task_id = parse_id(&task_id, "taskId")?;
    let description = required_text(req.description, "description")?;

    // 2. Optional fields
    let mut item = DailyPlannerItem::new(task_name, task_id, description);
    if let Some(date) = optional_date(req.date, "date")? {
        item.date = date;
    }
    if let Some(status) = optional_enum::<DailyPlannerStatus>(req.status, "status")? {
        item.status = status;
    }
    item.assigned_users = into_members(req.assigned_users, "assignedUsers")?;
    item.created_by = optional_id(req.created_by, "createdBy")?;

    // 3. Persist
    let repo = DailyTaskRepository::new(pool);
    repo.create(&item).await?;

    log::info!("Created daily task {} ({})", item.id, item.task_name);

    Ok(Json(DailyTaskResponse {
        message: "Daily task added successfully!".to_string(),
        daily_task: item.into(),
    }))
}

/// PUT /daily-tasks/:id
pub async fn update_daily_task(
    Store(pool): Store,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateDailyTaskRequest>,
) -> ApiResult<Json<DailyTaskResponse>> {
    // 1. Parse ID
    let item_id = parse_path_id(&id, "daily task")?;

    // 2. Load existing item
    let repo = DailyTaskRepository::new(pool);
    let mut item = repo
        .find_by_id(item_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Daily task"))?;

    // 3. Apply updates
    if req.task_name.is_some() {
        item.task_name = required_text(req.task_name, "taskName")?;
    }
    if let Some(date) = optional_date(req.date, "date")? {
        item.date = date;
    }
    if req.task_id.is_some() {
        let task_id = required_text(req.task_id, "taskId")?;
        item.task_id = parse_id(&task_id, "taskId")?;
    }
    if let Some(members) = req.assigned_users {
        item.assigned_users = into_members(members, "assignedUsers")?;
    }
    if req.description.is_some() {
        item.description = required_text(req.description, "description")?;
    }
    if let Some(status) = optional_enum::<DailyPlannerStatus>(req.status, "status")? {
        item.status = status;
    }
    item.updated_at = Utc::now();

    // 4. Persist
    if !repo.update(&item).await? {
        return Err(ApiError::not_found("Daily task"));
    }

    log::info!("Updated daily task {} ({})", item.id, item.task_name);

    Ok(Json(DailyTaskResponse {
        message: "Daily task updated successfully".to_string(),
        daily_task: item.into(),
    }))
}

/// DELETE /daily-tasks/:id
pub async fn delete_daily_task(
    Store(pool): Store,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let item_id = parse_path_id(&id, "daily task")?;

    let repo = DailyTaskRepository::new(pool);
    if !repo.delete(item_id).await? {
        return Err(ApiError::not_found("Daily task"));
    }

    log::info!("Deleted daily task {}", item_id);

    Ok(Json(DeleteResponse::new(
        "Daily task deleted successfully",
        item_id,
    )))
}
