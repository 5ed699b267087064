//! Project REST API handlers

use crate::api::member_input::into_members;
use crate::api::validation::{
    optional_enum, optional_id, optional_text, parse_path_id, required_date, required_text,
};
use crate::{
    ApiError, ApiResult, CreateProjectRequest, DeleteResponse, ProjectDto, ProjectResponse, Store,
    UpdateProjectRequest, ValidJson,
};

use pms_core::{Project, ProjectStatus, parse_date};
use pms_db::ProjectRepository;

use axum::{Json, extract::Path};
use chrono::Utc;

/// GET /projects
pub async fn list_projects(Store(pool): Store) -> ApiResult<Json<Vec<ProjectDto>>> {
    let repo = ProjectRepository::new(pool);
    let projects = repo.find_all().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// GET /projects/:id
pub async fn get_project(
    Store(pool): Store,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = parse_path_id(&id, "project")?;

    let repo = ProjectRepository::new(pool);
    let project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project"))?;

    Ok(Json(project.into()))
}

/// POST /projects
pub async fn create_project(
    Store(pool): Store,
    ValidJson(req): ValidJson<CreateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    // 1. Required fields
    let name = required_text(req.name, "name")?;
    let description = required_text(req.description, "description")?;
    let start_date = required_date(req.start_date, "startDate")?;
    let end_date = required_date(req.end_date, "endDate")?;

    // 2. Build and validate
    let mut project = Project::new(name, description, start_date, end_date);
    if let Some(status) = optional_enum::<ProjectStatus>(req.status, "status")? {
        project.status = status;
    }
    project.team_members = into_members(req.team_members, "teamMembers")?;
    project.created_by = optional_id(req.created_by, "createdBy")?;
    project.validate_date_range()?;

    // 3. Persist
    let repo = ProjectRepository::new(pool);
    repo.create(&project).await?;

    log::info!("Created project {} ({})", project.id, project.name);

    Ok(Json(ProjectResponse {
        message: "Project added successfully!".to_string(),
        project: project.into(),
    }))
}

/// PUT /projects/:id
///
/// Overwrites the fields present in the body.
pub async fn update_project(
    Store(pool): Store,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    // 1. Parse project ID
    let project_id = parse_path_id(&id, "project")?;

    // 2. Load existing project
    let repo = ProjectRepository::new(pool);
    let mut project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project"))?;

    // 3. Apply updates
    if req.name.is_some() {
        project.name = required_text(req.name, "name")?;
    }
    if req.description.is_some() {
        project.description = required_text(req.description, "description")?;
    }
    if let Some(start) = optional_text(req.start_date) {
        project.start_date = parse_date(&start, "startDate")?;
    }
    if let Some(end) = optional_text(req.end_date) {
        project.end_date = parse_date(&end, "endDate")?;
    }
    if let Some(status) = optional_enum::<ProjectStatus>(req.status, "status")? {
        project.status = status;
    }
    if let Some(members) = req.team_members {
        project.team_members = into_members(members, "teamMembers")?;
    }
    project.validate_date_range()?;
    project.updated_at = Utc::now();

    // 4. Persist
    if !repo.update(&project).await? {
        return Err(ApiError::not_found("Project"));
    }

    log::info!("Updated project {} ({})", project.id, project.name);

    Ok(Json(ProjectResponse {
        message: "Project updated successfully".to_string(),
        project: project.into(),
    }))
}

/// DELETE /projects/:id
///
/// Hard delete. Sprints and tasks of the project are left in place.
pub async fn delete_project(
    Store(pool): Store,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = parse_path_id(&id, "project")?;

    let repo = ProjectRepository::new(pool);
    if !repo.delete(project_id).await? {
        return Err(ApiError::not_found("Project"));
    }

    log::info!("Deleted project {}", project_id);

    Ok(Json(DeleteResponse::new(
        "Project deleted successfully",
        project_id,
    )))
}
