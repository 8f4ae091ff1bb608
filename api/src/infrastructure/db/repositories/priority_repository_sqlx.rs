use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::priority_repository::{PriorityInput, PriorityRepository};
use crate::domain::priorities::Priority;
use crate::infrastructure::db::PgPool;

pub struct SqlxPriorityRepository {
    pub pool: PgPool,
}

impl SqlxPriorityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_priority(r: PgRow) -> Priority {
    Priority {
        id: r.get("id"),
        project_id: r.get("project_id"),
        title: r.get("title"),
        weight: r.get("weight"),
        color: r.get("color"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl PriorityRepository for SqlxPriorityRepository {
    async fn create(&self, project_id: i64, input: &PriorityInput) -> anyhow::Result<Priority> {
        let row = sqlx::query(
            r#"INSERT INTO priorities (project_id, title, weight, color) VALUES ($1, $2, $3, $4)
               RETURNING id, project_id, title, weight, color, created_at, updated_at"#,
        )
        .bind(project_id)
        .bind(&input.title)
        .bind(input.weight)
        .bind(&input.color)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_priority(row))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Priority>> {
        let row = sqlx::query(
            r#"SELECT id, project_id, title, weight, color, created_at, updated_at
               FROM priorities WHERE id = $1 AND deleted_at IS NULL"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(map_priority))
    }

    async fn list_for_project(&self, project_id: i64) -> anyhow::Result<Vec<Priority>> {
        let rows = sqlx::query(
            r#"SELECT id, project_id, title, weight, color, created_at, updated_at
               FROM priorities WHERE project_id = $1 AND deleted_at IS NULL
               ORDER BY weight DESC, id ASC"#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(map_priority).collect())
    }

    async fn update(&self, id: i64, input: &PriorityInput) -> anyhow::Result<Option<Priority>> {
        let row = sqlx::query(
            r#"UPDATE priorities SET title = $2, weight = $3, color = $4, updated_at = now()
               WHERE id = $1 AND deleted_at IS NULL
               RETURNING id, project_id, title, weight, color, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.weight)
        .bind(&input.color)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(map_priority))
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query(
            "UPDATE priorities SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(false);
        }
        // the FK only nulls on hard delete; detach live references here
        sqlx::query(
            "UPDATE topics SET priority_id = NULL, updated_at = now() WHERE priority_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        sqlx::query(
            "UPDATE actions SET priority_id = NULL, updated_at = now() WHERE priority_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(true)
    }
}
