//! User REST API handlers
//!
//! Responses go through [`UserDto`], which has no password field, so
//! neither plaintext nor hash can leak.

use crate::api::credentials;
use crate::api::validation::{optional_enum, optional_text, parse_path_id, required_text};
use crate::{
    ApiError, ApiResult, CreateUserRequest, DeleteResponse, Store, UpdateUserRequest, UserDto,
    UserResponse, ValidJson,
};

use pms_core::{User, UserRole};
use pms_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::Path};
use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

const DUPLICATE_USER_MESSAGE: &str = "User with this email or employee code already exists";

/// GET /users
pub async fn list_users(Store(pool): Store) -> ApiResult<Json<Vec<UserDto>>> {
    let repo = UserRepository::new(pool);
    let users = repo.find_all().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /users/:id
pub async fn get_user(Store(pool): Store, Path(id): Path<String>) -> ApiResult<Json<UserDto>> {
    let user_id = parse_path_id(&id, "user")?;

    let repo = UserRepository::new(pool);
    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(user.into()))
}

/// POST /users
///
/// Rejects a taken email or employee code before inserting. The unique
/// indexes still catch a concurrent insert; that error maps to the same 400.
pub async fn create_user(
    Store(pool): Store,
    ValidJson(req): ValidJson<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    // 1. Required fields
    let name = required_text(req.name, "name")?;
    let employee_code = required_text(req.employee_code, "employeeCode")?;
    let email = required_text(req.email, "email")?;
    let password = required_text(req.password, "password")?;
    let role = optional_enum::<UserRole>(req.role, "role")?.unwrap_or_default();

    // 2. Uniqueness
    let repo = UserRepository::new(pool);
    ensure_unique(&repo, &email, &employee_code, None).await?;

    // 3. Hash and persist
    let stored_password = credentials::hash(password).await?;
    let user = User::new(name, employee_code, &email, stored_password, role);
    repo.create(&user).await?;

    log::info!("Created user {} ({})", user.id, user.email);

    Ok(Json(UserResponse {
        message: "User created successfully".to_string(),
        user: user.into(),
    }))
}

/// PUT /users/:id
pub async fn update_user(
    Store(pool): Store,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    // 1. Parse user ID
    let user_id = parse_path_id(&id, "user")?;

    // 2. Load existing user
    let repo = UserRepository::new(pool);
    let mut user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    // 3. Apply updates
    if req.name.is_some() {
        user.name = required_text(req.name, "name")?;
    }
    if req.employee_code.is_some() {
        user.employee_code = required_text(req.employee_code, "employeeCode")?;
    }
    if req.email.is_some() {
        user.email = User::normalize_email(&required_text(req.email, "email")?);
    }
    if let Some(role) = optional_enum::<UserRole>(req.role, "role")? {
        user.role = role;
    }

    // 4. Re-check uniqueness against everyone else
    ensure_unique(&repo, &user.email, &user.employee_code, Some(user.id)).await?;

    if let Some(password) = optional_text(req.password) {
        user.stored_password = credentials::hash(password).await?;
    }
    user.updated_at = Utc::now();

    // 5. Persist
    if !repo.update(&user).await? {
        return Err(ApiError::not_found("User"));
    }

    log::info!("Updated user {} ({})", user.id, user.email);

    Ok(Json(UserResponse {
        message: "User updated successfully".to_string(),
        user: user.into(),
    }))
}

/// DELETE /users/:id
///
/// Member snapshots embedded in projects, sprints and daily tasks are left
/// untouched.
pub async fn delete_user(
    Store(pool): Store,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = parse_path_id(&id, "user")?;

    let repo = UserRepository::new(pool);
    if !repo.delete(user_id).await? {
        return Err(ApiError::not_found("User"));
    }

    log::info!("Deleted user {}", user_id);

    Ok(Json(DeleteResponse::new("User deleted successfully", user_id)))
}

async fn ensure_unique(
    repo: &UserRepository,
    email: &str,
    employee_code: &str,
    exclude: Option<Uuid>,
) -> ApiResult<()> {
    if let Some(existing) = repo.find_conflicting(email, employee_code, exclude).await? {
        log::warn!(
            "Rejected user write: email or employee code held by {}",
            existing.id
        );
        return Err(ApiError::Duplicate {
            message: DUPLICATE_USER_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
