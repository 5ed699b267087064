//! Sprint REST API handlers

use crate::api::member_input::into_members;
use crate::api::validation::{
    optional_enum, optional_id, optional_text, parse_path_id, required_date, required_text,
};
use crate::{
    ApiError, ApiResult, CreateSprintRequest, DeleteResponse, RequestScope, SprintDto,
    SprintResponse, Store, UpdateSprintRequest, ValidJson,
};

use pms_core::{Sprint, SprintStatus, parse_date};
use pms_db::SprintRepository;

use axum::{Json, extract::Path};
use chrono::Utc;

/// GET /sprints?userId=&role=
///
/// Admins and anonymous callers see every sprint; anyone else only the
/// sprints they are assigned to or created.
pub async fn list_sprints(
    Store(pool): Store,
    RequestScope(scope): RequestScope,
) -> ApiResult<Json<Vec<SprintDto>>> {
    let repo = SprintRepository::new(pool);
    let sprints = repo.find_visible_to(scope).await?;

    Ok(Json(sprints.into_iter().map(SprintDto::from).collect()))
}

/// GET /sprints/:id
pub async fn get_sprint(Store(pool): Store, Path(id): Path<String>) -> ApiResult<Json<SprintDto>> {
    let sprint_id = parse_path_id(&id, "sprint")?;

    let repo = SprintRepository::new(pool);
    let sprint = repo
        .find_by_id(sprint_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Sprint"))?;

    Ok(Json(sprint.into()))
}

/// POST /sprints
pub async fn create_sprint(
    Store(pool): Store,
    ValidJson(req): ValidJson<CreateSprintRequest>,
) -> ApiResult<Json<SprintResponse>> {
    // 1. Required fields
    let sprint_name = required_text(req.sprint_name, "sprintName")?;
    let description = required_text(req.description, "description")?;
    let start_date = required_date(req.start_date, "startDate")?;
    let end_date = required_date(req.end_date, "endDate")?;

    // 2. Optional fields
    let mut sprint = Sprint::new(sprint_name, description, start_date, end_date);
    if let Some(status) = optional_enum::<SprintStatus>(req.status, "status")? {
        sprint.status = status;
    }
    sprint.project_id = optional_id(req.project_id, "projectId")?;
    sprint.assigned_users = into_members(req.assigned_users, "assignedUsers")?;
    sprint.created_by = optional_id(req.created_by, "createdBy")?;

    // 3. Persist
    let repo = SprintRepository::new(pool);
    repo.create(&sprint).await?;

    log::info!("Created sprint {} ({})", sprint.id, sprint.sprint_name);

    Ok(Json(SprintResponse {
        message: "Sprint added successfully!".to_string(),
        sprint: sprint.into(),
    }))
}

/// PUT /sprints/:id
pub async fn update_sprint(
    Store(pool): Store,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateSprintRequest>,
) -> ApiResult<Json<SprintResponse>> {
    // 1. Parse sprint ID
    let sprint_id = parse_path_id(&id, "sprint")?;

    // 2. Load existing sprint
    let repo = SprintRepository::new(pool);
    let mut sprint = repo
        .find_by_id(sprint_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Sprint"))?;

    // 3. Apply updates
    if req.sprint_name.is_some() {
        sprint.sprint_name = required_text(req.sprint_name, "sprintName")?;
    }
    if req.description.is_some() {
        sprint.description = required_text(req.description, "description")?;
    }
    if let Some(start) = optional_text(req.start_date) {
        sprint.start_date = parse_date(&start, "startDate")?;
    }
    if let Some(end) = optional_text(req.end_date) {
        sprint.end_date = parse_date(&end, "endDate")?;
    }
    if let Some(status) = optional_enum::<SprintStatus>(req.status, "status")? {
        sprint.status = status;
    }
    if let Some(project_id) = req.project_id {
        sprint.project_id = optional_id(project_id, "projectId")?;
    }
    if let Some(members) = req.assigned_users {
        sprint.assigned_users = into_members(members, "assignedUsers")?;
    }
    sprint.updated_at = Utc::now();

    // 4. Persist
    if !repo.update(&sprint).await? {
        return Err(ApiError::not_found("Sprint"));
    }

    log::info!("Updated sprint {} ({})", sprint.id, sprint.sprint_name);

    Ok(Json(SprintResponse {
        message: "Sprint updated successfully".to_string(),
        sprint: sprint.into(),
    }))
}

/// DELETE /sprints/:id
pub async fn delete_sprint(
    Store(pool): Store,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let sprint_id = parse_path_id(&id, "sprint")?;

    let repo = SprintRepository::new(pool);
    if !repo.delete(sprint_id).await? {
        return Err(ApiError::not_found("Sprint"));
    }

    log::info!("Deleted sprint {}", sprint_id);

    Ok(Json(DeleteResponse::new(
        "Sprint deleted successfully",
        sprint_id,
    )))
}
