use crate::row_mapping;
use crate::Result as DbErrorResult;

use pms_core::{AccessScope, Sprint};

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

const SPRINT_COLUMNS: &str = "id, sprint_name, description, start_date, end_date, status, \
                              project_id, assigned_users, created_by, created_at, updated_at";

pub struct SprintRepository {
    pool: SqlitePool,
}

impl SprintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, sprint: &Sprint) -> DbErrorResult<()> {
        let assigned_users = row_mapping::to_json(&sprint.assigned_users)?;

        sqlx::query(
            r#"
                INSERT INTO sprints (
                                     id, sprint_name, description, start_date, end_date, status,
                                     project_id, assigned_users, created_by, created_at, updated_at
                                     ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sprint.id.to_string())
        .bind(&sprint.sprint_name)
        .bind(&sprint.description)
        .bind(row_mapping::db_time(&sprint.start_date))
        .bind(row_mapping::db_time(&sprint.end_date))
        .bind(sprint.status.as_str())
        .bind(sprint.project_id.map(|id| id.to_string()))
        .bind(assigned_users)
        .bind(sprint.created_by.map(|id| id.to_string()))
        .bind(row_mapping::db_time(&sprint.created_at))
        .bind(row_mapping::db_time(&sprint.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Sprint>> {
        let row = sqlx::query(&format!("SELECT {SPRINT_COLUMNS} FROM sprints WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Sprint>> {
        self.find_visible_to(AccessScope::All).await
    }

    /// Sprints the scope may see: everything, or those assigned to or
    /// created by the user.
    pub async fn find_visible_to(&self, scope: AccessScope) -> DbErrorResult<Vec<Sprint>> {
        let rows = match scope {
            AccessScope::All => {
                sqlx::query(&format!(
                    "SELECT {SPRINT_COLUMNS} FROM sprints ORDER BY created_at, rowid"
                ))
                .fetch_all(&self.pool)
                .await?
            }
            AccessScope::User(user_id) => {
                let user_id = user_id.to_string();
                sqlx::query(&format!(
                    r#"
                        SELECT {SPRINT_COLUMNS} FROM sprints
                        WHERE created_by = ?
                           OR EXISTS (
                                SELECT 1 FROM json_each(sprints.assigned_users)
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

    pub async fn update(&self, sprint: &Sprint) -> DbErrorResult<bool> {
        let assigned_users = row_mapping::to_json(&sprint.assigned_users)?;

        let result = sqlx::query(
            r#"
                UPDATE sprints
                SET sprint_name = ?, description = ?, start_date = ?, end_date = ?, status = ?,
                    project_id = ?, assigned_users = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&sprint.sprint_name)
        .bind(&sprint.description)
        .bind(row_mapping::db_time(&sprint.start_date))
        .bind(row_mapping::db_time(&sprint.end_date))
        .bind(sprint.status.as_str())
        .bind(sprint.project_id.map(|id| id.to_string()))
        .bind(assigned_users)
        .bind(row_mapping::db_time(&sprint.updated_at))
        .bind(sprint.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM sprints WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_row(row: &SqliteRow) -> DbErrorResult<Sprint> {
    Ok(Sprint {
        id: row_mapping::uuid(row, "sprints", "id")?,
        sprint_name: row.try_get("sprint_name")?,
        description: row.try_get("description")?,
        start_date: row_mapping::timestamp(row, "sprints", "start_date")?,
        end_date: row_mapping::timestamp(row, "sprints", "end_date")?,
        status: row_mapping::enum_value(row, "sprints", "status")?,
        project_id: row_mapping::optional_uuid(row, "sprints", "project_id")?,
        assigned_users: row_mapping::json(row, "sprints", "assigned_users")?,
        created_by: row_mapping::optional_uuid(row, "sprints", "created_by")?,
        created_at: row_mapping::timestamp(row, "sprints", "created_at")?,
        updated_at: row_mapping::timestamp(row, "sprints", "updated_at")?,
    })
}
