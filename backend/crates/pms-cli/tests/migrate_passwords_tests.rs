//! Offline password migration against a real SQLite file

use pms_auth::{PasswordVerdict, hash_password, verify_stored_password};
use pms_cli::migrate_passwords;
use pms_core::{User, UserRole};
use pms_db::UserRepository;

use googletest::prelude::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn open_store(dir: &TempDir) -> SqlitePool {
    let pool = pms_db::connect(&dir.path().join("pms.db"), 1)
        .await
        .unwrap();
    pms_db::run_migrations(&pool).await.unwrap();
    pool
}

async fn insert_user(repo: &UserRepository, email: &str, code: &str, stored: String) -> User {
    let user = User::new("Test".into(), code.into(), email, stored, UserRole::Qa);
    repo.create(&user).await.unwrap();
    user
}

#[tokio::test]
async fn test_hashes_only_plaintext_rows() {
    let dir = TempDir::new().unwrap();
    let pool = open_store(&dir).await;
    let repo = UserRepository::new(pool.clone());

    let legacy = insert_user(&repo, "old@example.com", "E1", "secret".into()).await;
    let hashed = hash_password("already").unwrap();
    let modern = insert_user(&repo, "new@example.com", "E2", hashed.clone()).await;

    let updated = migrate_passwords(&pool).await.unwrap();
    assert_that!(updated, eq(1));

    let legacy = repo.find_by_id(legacy.id).await.unwrap().unwrap();
    assert_that!(legacy.stored_password, starts_with("$argon2"));
    assert_that!(
        verify_stored_password("secret", &legacy.stored_password).unwrap(),
        eq(PasswordVerdict::Valid)
    );

    let modern = repo.find_by_id(modern.id).await.unwrap().unwrap();
    assert_that!(modern.stored_password, eq(&hashed));
}

#[tokio::test]
async fn test_second_run_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let pool = open_store(&dir).await;
    let repo = UserRepository::new(pool.clone());
    insert_user(&repo, "old@example.com", "E1", "secret".into()).await;

    assert_that!(migrate_passwords(&pool).await.unwrap(), eq(1));
    assert_that!(migrate_passwords(&pool).await.unwrap(), eq(0));
}
