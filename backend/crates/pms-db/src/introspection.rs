//! Store health and content summary for the diagnostic endpoints.

use crate::Result as DbErrorResult;

use std::collections::BTreeMap;

use sqlx::{Row, SqlitePool};

/// Entity tables and their row counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseStats {
    pub tables: Vec<String>,
    pub counts: BTreeMap<String, i64>,
}

/// Round-trip a trivial query.
pub async fn ping(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// List user tables (SQLite and migration bookkeeping excluded) with row counts.
pub async fn collect_stats(pool: &SqlitePool) -> DbErrorResult<DatabaseStats> {
    let rows = sqlx::query(
        r#"
            SELECT name FROM sqlite_master
            WHERE type = 'table'
              AND name NOT LIKE 'sqlite_%'
              AND name NOT LIKE '\_sqlx%' ESCAPE '\'
            ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut stats = DatabaseStats::default();

    for row in rows {
        let name: String = row.try_get("name")?;
        // Names come from sqlite_master; quote them anyway
        let quoted = name.replace('"', "\"\"");
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM \"{quoted}\""))
            .fetch_one(pool)
            .await?;

        stats.counts.insert(name.clone(), count);
        stats.tables.push(name);
    }

    Ok(stats)
}
