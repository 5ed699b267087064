//! Email/password login

use crate::api::credentials;
use crate::api::validation::optional_text;
use crate::{ApiError, ApiResult, AppState, LoginRequest, LoginResponse, Store, ValidJson};

use pms_auth::PasswordVerdict;
use pms_core::User;
use pms_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// Unknown email and wrong password share this message
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /login
///
/// A correct password stored as legacy plaintext is accepted once and then
/// replaced by an Argon2id hash.
pub async fn login(
    Store(pool): Store,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    // 1. Both fields present
    let (email, password) = match (optional_text(req.email), req.password) {
        (Some(email), Some(password)) if !password.is_empty() => (email, password),
        _ => {
            return Err(ApiError::BadRequest {
                message: "Email and password are required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };
    let email = User::normalize_email(&email);

    // 2. Look up the account
    let repo = UserRepository::new(pool);
    let Some(user) = repo.find_by_email(&email).await? else {
        credentials::verify_dummy(password).await;
        log::warn!("Login failed: no account for {}", email);
        return Err(invalid_credentials());
    };

    // 3. Check the password
    let verdict = credentials::verify(password.clone(), user.stored_password.clone()).await?;
    match verdict {
        PasswordVerdict::Valid => {}
        PasswordVerdict::ValidLegacy => upgrade_legacy_password(&repo, &user, password).await,
        PasswordVerdict::Unsupported => {
            log::warn!(
                "Login refused: stored password for {} uses an unsupported hash scheme",
                user.id
            );
            return Err(invalid_credentials());
        }
        PasswordVerdict::Invalid => {
            log::warn!("Login failed: bad password for {}", email);
            return Err(invalid_credentials());
        }
    }

    // 4. Session token when enabled
    let token = match state.token_issuer.as_ref() {
        Some(issuer) => Some(issuer.issue(user.id, user.role.as_str())?),
        None => None,
    };

    log::info!("Login successful for {} ({})", user.name, user.id);

    Ok(Json(LoginResponse {
        message: "Logged in successfully".to_string(),
        user_type: user.role.as_str().to_string(),
        role: user.role.as_str().to_string(),
        name: user.name,
        email: user.email,
        user_id: user.id,
        employee_code: user.employee_code,
        token,
    }))
}

/// Failure here is logged and does not fail the login; the next login retries.
async fn upgrade_legacy_password(repo: &UserRepository, user: &User, password: String) {
    let hashed = match credentials::hash(password).await {
        Ok(hashed) => hashed,
        Err(e) => {
            log::error!("Failed to hash legacy password for {}: {}", user.id, e);
            return;
        }
    };

    match repo.update_password(user.id, &hashed).await {
        Ok(true) => log::info!("Upgraded legacy password for user {}", user.id),
        Ok(false) => log::warn!("User {} vanished before password upgrade", user.id),
        Err(e) => log::error!("Failed to store upgraded password for {}: {}", user.id, e),
    }
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized {
        message: INVALID_CREDENTIALS.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
