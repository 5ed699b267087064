use crate::row_mapping;
use crate::Result as DbErrorResult;

use pms_core::User;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, name, employee_code, email, password, role, created_at, updated_at";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                                   id, name, employee_code, email, password, role,
                                   created_at, updated_at
                                   ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.employee_code)
        .bind(&user.email)
        .bind(&user.stored_password)
        .bind(user.role.as_str())
        .bind(row_mapping::db_time(&user.created_at))
        .bind(row_mapping::db_time(&user.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, rowid"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    /// Lookup by email. The caller's value is normalized before comparison.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
            .bind(User::normalize_email(email))
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// First user, other than `exclude`, holding either `email` or `employee_code`.
    pub async fn find_conflicting(
        &self,
        email: &str,
        employee_code: &str,
        exclude: Option<Uuid>,
    ) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            r#"
                SELECT {USER_COLUMNS} FROM users
                WHERE (email = ? OR employee_code = ?)
                  AND (? IS NULL OR id <> ?)
                LIMIT 1
            "#
        ))
        .bind(User::normalize_email(email))
        .bind(employee_code)
        .bind(exclude.map(|id| id.to_string()))
        .bind(exclude.map(|id| id.to_string()))
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// Returns false when no row has this id.
    pub async fn update(&self, user: &User) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET name = ?, employee_code = ?, email = ?, password = ?, role = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.employee_code)
        .bind(&user.email)
        .bind(&user.stored_password)
        .bind(user.role.as_str())
        .bind(row_mapping::db_time(&user.updated_at))
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn update_password(&self, id: Uuid, stored_password: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET password = ?, updated_at = ? WHERE id = ?")
            .bind(stored_password)
            .bind(row_mapping::db_time(&chrono::Utc::now()))
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Users whose stored password is plaintext, i.e. carries neither the
    /// Argon2 nor a bcrypt scheme prefix.
    pub async fn find_with_legacy_passwords(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(&format!(
            r#"
                SELECT {USER_COLUMNS} FROM users
                WHERE substr(password, 1, 7) <> '$argon2'
                  AND substr(password, 1, 4) NOT IN ('$2a$', '$2b$', '$2y$')
                ORDER BY created_at, rowid
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_row(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: row_mapping::uuid(row, "users", "id")?,
        name: row.try_get("name")?,
        employee_code: row.try_get("employee_code")?,
        email: row.try_get("email")?,
        stored_password: row.try_get("password")?,
        role: row_mapping::enum_value(row, "users", "role")?,
        created_at: row_mapping::timestamp(row, "users", "created_at")?,
        updated_at: row_mapping::timestamp(row, "users", "updated_at")?,
    })
}
