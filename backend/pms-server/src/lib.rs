pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_log;
pub mod routes;
pub mod startup;

#[cfg(test)]
mod tests;

pub use api::{
    daily_tasks::{
        create_daily_task_request::CreateDailyTaskRequest,
        daily_task_dto::DailyTaskDto,
        daily_task_response::DailyTaskResponse,
        daily_tasks::{
            create_daily_task, delete_daily_task, get_daily_task, list_daily_tasks,
            update_daily_task,
        },
        update_daily_task_request::UpdateDailyTaskRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        request_scope::{RequestScope, ScopeQuery},
        store::Store,
        valid_json::ValidJson,
    },
    login::{login::login, login_request::LoginRequest, login_response::LoginResponse},
    member_input::MemberInput,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        project_response::ProjectResponse,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
        update_project_request::UpdateProjectRequest,
    },
    sprints::{
        create_sprint_request::CreateSprintRequest,
        sprint_dto::SprintDto,
        sprint_response::SprintResponse,
        sprints::{create_sprint, delete_sprint, get_sprint, list_sprints, update_sprint},
        update_sprint_request::UpdateSprintRequest,
    },
    tasks::{
        create_task_request::CreateTaskRequest,
        task_dto::TaskDto,
        task_response::TaskResponse,
        tasks::{
            create_task, delete_task, get_task, list_tasks, list_tasks_by_project,
            list_tasks_by_sprint, update_task,
        },
        update_task_request::UpdateTaskRequest,
    },
    users::{
        create_user_request::CreateUserRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
