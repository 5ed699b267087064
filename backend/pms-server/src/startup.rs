//! Store initialization: connect, migrate, seed, then open the readiness gate

use crate::AppState;
use crate::error::Result as ServerErrorResult;

use pms_auth::hash_password;
use pms_config::AdminConfig;
use pms_core::{User, UserRole};
use pms_db::UserRepository;

use std::path::Path;

use sqlx::SqlitePool;

/// Bring the store up and open the gate on `state`.
///
/// On error the gate stays closed and store-backed endpoints keep
/// answering 503.
pub async fn initialize_store(
    state: &AppState,
    database_path: &Path,
    max_connections: u32,
    admin: &AdminConfig,
) -> ServerErrorResult<()> {
    log::info!("Connecting to database: {}", database_path.display());
    let pool = pms_db::connect(database_path, max_connections).await?;
    log::info!("Database connection established");

    log::info!("Running database migrations...");
    pms_db::run_migrations(&pool).await?;
    log::info!("Migrations complete");

    if admin.seed {
        // An admin that cannot be created is not a reason to refuse traffic
        if let Err(e) = seed_admin(&pool, admin).await {
            log::error!("Failed to seed admin user: {}", e);
        }
    }

    report_legacy_passwords(&pool).await;

    if state.open_gate(pool) {
        log::info!("Store ready, accepting requests");
    } else {
        log::warn!("Readiness gate was already open; new pool discarded");
    }

    Ok(())
}

/// Create the configured admin unless a user with its email exists.
///
/// Returns true when a user was created.
pub async fn seed_admin(pool: &SqlitePool, admin: &AdminConfig) -> ServerErrorResult<bool> {
    let repo = UserRepository::new(pool.clone());

    if let Some(existing) = repo.find_by_email(&admin.email).await? {
        log::info!("Admin user already exists: {}", existing.email);
        return Ok(false);
    }

    let stored_password = hash_password(&admin.password)?;
    let user = User::new(
        admin.name.clone(),
        admin.employee_code.clone(),
        &admin.email,
        stored_password,
        UserRole::Admin,
    );
    repo.create(&user).await?;

    log::info!("Admin user created: {} ({})", user.email, user.employee_code);
    if admin.uses_default_password() {
        log::warn!("Admin user uses the default password; change it after first login");
    }

    Ok(true)
}

async fn report_legacy_passwords(pool: &SqlitePool) {
    match UserRepository::new(pool.clone())
        .find_with_legacy_passwords()
        .await
    {
        Ok(users) if !users.is_empty() => log::warn!(
            "{} user(s) still have plaintext passwords; they are upgraded on next login or by `pms migrate-passwords`",
            users.len()
        ),
        Ok(_) => {}
        Err(e) => log::warn!("Could not check for legacy passwords: {}", e),
    }
}
