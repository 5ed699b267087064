//! Offline re-hash of plaintext passwords
//!
//! Operates on the database file directly, so it works while the server is
//! down. Already-hashed rows are never touched, which makes reruns harmless.

use crate::CliResult;

use pms_auth::hash_password;
use pms_db::UserRepository;

use sqlx::SqlitePool;

/// Hash every legacy plaintext password; returns how many rows changed
pub async fn migrate_passwords(pool: &SqlitePool) -> CliResult<usize> {
    let repo = UserRepository::new(pool.clone());
    let legacy = repo.find_with_legacy_passwords().await?;

    let mut updated = 0;
    for user in legacy {
        let hashed = hash_password(&user.stored_password)?;
        if repo.update_password(user.id, &hashed).await? {
            updated += 1;
        }
    }

    Ok(updated)
}
