use crate::row_mapping;
use crate::Result as DbErrorResult;

use pms_core::Project;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

const PROJECT_COLUMNS: &str = "id, name, description, start_date, end_date, status, \
                               team_members, created_by, created_at, updated_at";

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        let team_members = row_mapping::to_json(&project.team_members)?;

        sqlx::query(
            r#"
                INSERT INTO projects (
                                      id, name, description, start_date, end_date, status,
                                      team_members, created_by, created_at, updated_at
                                      ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.description)
        .bind(row_mapping::db_time(&project.start_date))
        .bind(row_mapping::db_time(&project.end_date))
        .bind(project.status.as_str())
        .bind(team_members)
        .bind(project.created_by.map(|id| id.to_string()))
        .bind(row_mapping::db_time(&project.created_at))
        .bind(row_mapping::db_time(&project.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at, rowid"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    /// Overwrite the mutable fields. Returns false when no row has this id.
    pub async fn update(&self, project: &Project) -> DbErrorResult<bool> {
        let team_members = row_mapping::to_json(&project.team_members)?;

        let result = sqlx::query(
            r#"
                UPDATE projects
                SET name = ?, description = ?, start_date = ?, end_date = ?, status = ?,
                    team_members = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(row_mapping::db_time(&project.start_date))
        .bind(row_mapping::db_time(&project.end_date))
        .bind(project.status.as_str())
        .bind(team_members)
        .bind(row_mapping::db_time(&project.updated_at))
        .bind(project.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Sprints and tasks pointing at the project are left alone.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_row(row: &SqliteRow) -> DbErrorResult<Project> {
    Ok(Project {
        id: row_mapping::uuid(row, "projects", "id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        start_date: row_mapping::timestamp(row, "projects", "start_date")?,
        end_date: row_mapping::timestamp(row, "projects", "end_date")?,
        status: row_mapping::enum_value(row, "projects", "status")?,
        team_members: row_mapping::json(row, "projects", "team_members")?,
        created_by: row_mapping::optional_uuid(row, "projects", "created_by")?,
        created_at: row_mapping::timestamp(row, "projects", "created_at")?,
        updated_at: row_mapping::timestamp(row, "projects", "updated_at")?,
    })
}
