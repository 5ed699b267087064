mod common;

use common::{create_test_daily_task, create_test_pool, member};

use pms_core::{AccessScope, DailyPlannerStatus};
use pms_db::DailyTaskRepository;

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_entry_when_created_then_can_be_found_by_id() {
    // Given
    let pool = create_test_pool().await;
    let repo = DailyTaskRepository::new(pool);
    let item = create_test_daily_task(Uuid::new_v4());

    // When
    repo.create(&item).await.unwrap();

    // Then
    let found = repo.find_by_id(item.id).await.unwrap().unwrap();
    assert_that!(found.task_id, eq(item.task_id));
    assert_that!(found.description, eq(&item.description));
    assert_that!(found.status, eq(DailyPlannerStatus::Pending));
}

#[tokio::test]
async fn given_entries_when_scoped_to_user_then_only_assigned_or_created() {
    // Given
    let pool = create_test_pool().await;
    let repo = DailyTaskRepository::new(pool);
    let user = Uuid::new_v4();

    let mut mine = create_test_daily_task(Uuid::new_v4());
    mine.assigned_users.push(member(user));
    let mut theirs = create_test_daily_task(Uuid::new_v4());
    theirs.assigned_users.push(member(Uuid::new_v4()));
    repo.create(&mine).await.unwrap();
    repo.create(&theirs).await.unwrap();

    // When
    let visible = repo.find_visible_to(AccessScope::User(user)).await.unwrap();

    // Then
    assert_that!(visible.len(), eq(1));
    assert_that!(visible[0].id, eq(mine.id));
    assert_that!(repo.find_all().await.unwrap().len(), eq(2));
}

#[tokio::test]
async fn given_existing_entry_when_updated_and_deleted_then_persisted() {
    // Given
    let pool = create_test_pool().await;
    let repo = DailyTaskRepository::new(pool);
    let mut item = create_test_daily_task(Uuid::new_v4());
    repo.create(&item).await.unwrap();

    // When
    item.status = DailyPlannerStatus::Completed;
    item.updated_at = Utc::now();
    repo.update(&item).await.unwrap();

    // Then
    let found = repo.find_by_id(item.id).await.unwrap().unwrap();
    assert_that!(found.status, eq(DailyPlannerStatus::Completed));

    assert_that!(repo.delete(item.id).await.unwrap(), eq(true));
    assert_that!(repo.find_by_id(item.id).await.unwrap(), none());
}
