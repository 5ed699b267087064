use crate::{AppState, health, request_log};
use crate::{
    create_daily_task, create_project, create_sprint, create_task, create_user,
    delete_daily_task, delete_project, delete_sprint, delete_task, delete_user, get_daily_task,
    get_project, get_sprint, get_task, get_user, list_daily_tasks, list_projects, list_sprints,
    list_tasks, list_tasks_by_project, list_tasks_by_sprint, list_users, login, update_daily_task,
    update_project, update_sprint, update_task, update_user,
};

use axum::{
    Router,
    http::Method,
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
///
/// Every entity has the canonical REST routes plus the `/add`,
/// `/update/{id}` and `/delete/{id}` aliases the web client calls.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Introspection
        .route("/api/health", get(health::health))
        .route("/api/ready", get(health::ready))
        .route("/api/debug/db", get(health::debug_db))
        // Login
        .route("/login", post(login))
        // Users
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/add", post(create_user))
        .route("/users/update/{id}", put(update_user))
        .route("/users/delete/{id}", delete(delete_user))
        // Projects
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/projects/add", post(create_project))
        .route("/projects/update/{id}", put(update_project))
        .route("/projects/delete/{id}", delete(delete_project))
        // Sprints
        .route("/sprints", get(list_sprints).post(create_sprint))
        .route(
            "/sprints/{id}",
            get(get_sprint).put(update_sprint).delete(delete_sprint),
        )
        .route("/sprints/add", post(create_sprint))
        .route("/sprints/update/{id}", put(update_sprint))
        .route("/sprints/delete/{id}", delete(delete_sprint))
        // Tasks
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tasks/sprint/{sprint_id}", get(list_tasks_by_sprint))
        .route("/tasks/project/{project_id}", get(list_tasks_by_project))
        .route("/tasks/add", post(create_task))
        .route("/tasks/update/{id}", put(update_task))
        .route("/tasks/delete/{id}", delete(delete_task))
        // Daily planner
        .route("/daily-tasks", get(list_daily_tasks).post(create_daily_task))
        .route(
            "/daily-tasks/{id}",
            get(get_daily_task)
                .put(update_daily_task)
                .delete(delete_daily_task),
        )
        .route("/daily-tasks/add", post(create_daily_task))
        .route("/daily-tasks/update/{id}", put(update_daily_task))
        .route("/daily-tasks/delete/{id}", delete(delete_daily_task))
        .fallback(request_log::route_not_found)
        // Add shared state
        .with_state(state)
        .layer(middleware::from_fn(request_log::log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers(Any),
        )
}
