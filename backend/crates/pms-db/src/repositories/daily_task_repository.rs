use crate::row_mapping;
use crate::Result as DbErrorResult;

use pms_core::{AccessScope, DailyPlannerItem};

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

const DAILY_TASK_COLUMNS: &str = "id, task_name, date, task_id, assigned_users, description, \
                                  status, created_by, created_at, updated_at";

/// Storage for daily planner entries (`daily_tasks` table).
pub struct DailyTaskRepository {
    pool: SqlitePool,
}

impl DailyTaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, item: &DailyPlannerItem) -> DbErrorResult<()> {
        let assigned_users = row_mapping::to_json(&item.assigned_users)?;

        sqlx::query(
            r#"
                INSERT INTO daily_tasks (
                                         id, task_name, date, task_id, assigned_users, description,
                                         status, created_by, created_at, updated_at
                                         ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.id.to_string())
        .bind(&item.task_name)
        .bind(row_mapping::db_time(&item.date))
        .bind(item.task_id.to_string())
        .bind(assigned_users)
        .bind(&item.description)
        .bind(item.status.as_str())
        .bind(item.created_by.map(|id| id.to_string()))
        .bind(row_mapping::db_time(&item.created_at))
        .bind(row_mapping::db_time(&item.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<DailyPlannerItem>> {
        let row = sqlx::query(&format!(
            "SELECT {DAILY_TASK_COLUMNS} FROM daily_tasks WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<DailyPlannerItem>> {
        self.find_visible_to(AccessScope::All).await
    }

    pub async fn find_visible_to(&self, scope: AccessScope) -> DbErrorResult<Vec<DailyPlannerItem>> {
        let rows = match scope {
            AccessScope::All => {
                sqlx::query(&format!(
                    "SELECT {DAILY_TASK_COLUMNS} FROM daily_tasks ORDER BY created_at, rowid"
                ))
                .fetch_all(&self.pool)
                .await?
            }
            AccessScope::User(user_id) => {
                let user_id = user_id.to_string();
                sqlx::query(&format!(
                    r#"
                        SELECT {DAILY_TASK_COLUMNS} FROM daily_tasks
                        WHERE created_by = ?
                           OR EXISTS (
                                SELECT 1 FROM json_each(daily_tasks.assigned_users)
                                WHERE json_extract(json_each.value, '$.userId') = ?
                           )
                        ORDER BY created_at, rowid
                    "#
                ))
                .bind(&user_id)
                .bind(&user_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(map_row).collect()
    }

    pub async fn update(&self, item: &DailyPlannerItem) -> DbErrorResult<bool> {
        let assigned_users = row_mapping::to_json(&item.assigned_users)?;

        let result = sqlx::query(
            r#"
                UPDATE daily_tasks
                SET task_name = ?, date = ?, task_id = ?, assigned_users = ?, description = ?,
                    status = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&item.task_name)
        .bind(row_mapping::db_time(&item.date))
        .bind(item.task_id.to_string())
        .bind(assigned_users)
        .bind(&item.description)
        .bind(item.status.as_str())
        .bind(row_mapping::db_time(&item.updated_at))
        .bind(item.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM daily_tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_row(row: &SqliteRow) -> DbErrorResult<DailyPlannerItem> {
    Ok(DailyPlannerItem {
        id: row_mapping::uuid(row, "daily_tasks", "id")?,
        task_name: row.try_get("task_name")?,
        date: row_mapping::timestamp(row, "daily_tasks", "date")?,
        task_id: row_mapping::uuid(row, "daily_tasks", "task_id")?,
        assigned_users: row_mapping::json(row, "daily_tasks", "assigned_users")?,
        description: row.try_get("description")?,
        status: row_mapping::enum_value(row, "daily_tasks", "status")?,
        created_by: row_mapping::optional_uuid(row, "daily_tasks", "created_by")?,
        created_at: row_mapping::timestamp(row, "daily_tasks", "created_at")?,
        updated_at: row_mapping::timestamp(row, "daily_tasks", "updated_at")?,
    })
}
