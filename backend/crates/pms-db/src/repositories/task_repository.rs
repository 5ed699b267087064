use crate::row_mapping;
use crate::Result as DbErrorResult;

use pms_core::{AccessScope, Task};

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

const TASK_COLUMNS: &str = "id, title, description, project_id, sprint_id, assigned_to, \
                            status, priority, start_date, end_date, created_by, \
                            created_at, updated_at";

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, task: &Task) -> DbErrorResult<()> {
        let assigned_to = row_mapping::to_json(&task.assigned_to)?;

        sqlx::query(
            r#"
                INSERT INTO tasks (
                                   id, title, description, project_id, sprint_id, assigned_to,
                                   status, priority, start_date, end_date, created_by,
                                   created_at, updated_at
                                   ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.project_id.to_string())
        .bind(task.sprint_id.map(|id| id.to_string()))
        .bind(assigned_to)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.start_date.as_ref().map(row_mapping::db_time))
        .bind(task.end_date.as_ref().map(row_mapping::db_time))
        .bind(task.created_by.map(|id| id.to_string()))
        .bind(row_mapping::db_time(&task.created_at))
        .bind(row_mapping::db_time(&task.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let row = sqlx::query(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Task>> {
        self.find_visible_to(AccessScope::All).await
    }

    /// Tasks the scope may see: everything, or those assigned to or
    /// created by the user.
    pub async fn find_visible_to(&self, scope: AccessScope) -> DbErrorResult<Vec<Task>> {
        let rows = match scope {
            AccessScope::All => {
                sqlx::query(&format!(
                    "SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at, rowid"
                ))
                .fetch_all(&self.pool)
                .await?
            }
            AccessScope::User(user_id) => {
                let user_id = user_id.to_string();
                sqlx::query(&format!(
                    r#"
                        SELECT {TASK_COLUMNS} FROM tasks
                        WHERE created_by = ?
                           OR EXISTS (
                                SELECT 1 FROM json_each(tasks.assigned_to)
                                WHERE json_each.value = ?
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

    pub async fn find_by_sprint(&self, sprint_id: Uuid) -> DbErrorResult<Vec<Task>> {
        let rows = sqlx::query(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE sprint_id = ? ORDER BY created_at, rowid"
        ))
        .bind(sprint_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn find_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Task>> {
        let rows = sqlx::query(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE project_id = ? ORDER BY created_at, rowid"
        ))
        .bind(project_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn update(&self, task: &Task) -> DbErrorResult<bool> {
        let assigned_to = row_mapping::to_json(&task.assigned_to)?;

        let result = sqlx::query(
            r#"
                UPDATE tasks
                SET title = ?, description = ?, project_id = ?, sprint_id = ?, assigned_to = ?,
                    status = ?, priority = ?, start_date = ?, end_date = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.project_id.to_string())
        .bind(task.sprint_id.map(|id| id.to_string()))
        .bind(assigned_to)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.start_date.as_ref().map(row_mapping::db_time))
        .bind(task.end_date.as_ref().map(row_mapping::db_time))
        .bind(row_mapping::db_time(&task.updated_at))
        .bind(task.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_row(row: &SqliteRow) -> DbErrorResult<Task> {
    Ok(Task {
        id: row_mapping::uuid(row, "tasks", "id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        project_id: row_mapping::uuid(row, "tasks", "project_id")?,
        sprint_id: row_mapping::optional_uuid(row, "tasks", "sprint_id")?,
        assigned_to: row_mapping::json(row, "tasks", "assigned_to")?,
        status: row_mapping::enum_value(row, "tasks", "status")?,
        priority: row_mapping::enum_value(row, "tasks", "priority")?,
        start_date: row_mapping::optional_timestamp(row, "tasks", "start_date")?,
        end_date: row_mapping::optional_timestamp(row, "tasks", "end_date")?,
        created_by: row_mapping::optional_uuid(row, "tasks", "created_by")?,
        created_at: row_mapping::timestamp(row, "tasks", "created_at")?,
        updated_at: row_mapping::timestamp(row, "tasks", "updated_at")?,
    })
}
