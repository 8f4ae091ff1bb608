use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::tag_repository::TagRepository;
use crate::domain::tags::Tag;
use crate::infrastructure::db::PgPool;

pub struct SqlxTagRepository {
    pub pool: PgPool,
}

impl SqlxTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_tag(r: PgRow) -> Tag {
    Tag {
        id: r.get("id"),
        project_id: r.get("project_id"),
        title: r.get("title"),
        color: r.get("color"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl TagRepository for SqlxTagRepository {
    async fn create(&self, project_id: i64, title: &str, color: &str) -> anyhow::Result<Tag> {
        let row = sqlx::query(
            r#"INSERT INTO tags (project_id, title, color) VALUES ($1, $2, $3)
               RETURNING id, project_id, title, color, created_at, updated_at"#,
        )
        .bind(project_id)
        .bind(title)
        .bind(color)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_tag(row))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Tag>> {
        let row = sqlx::query(
            r#"SELECT id, project_id, title, color, created_at, updated_at
               FROM tags WHERE id = $1 AND deleted_at IS NULL"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(map_tag))
    }

    async fn list_for_project(&self, project_id: i64) -> anyhow::Result<Vec<Tag>> {
        let rows = sqlx::query(
            r#"SELECT id, project_id, title, color, created_at, updated_at
               FROM tags WHERE project_id = $1 AND deleted_at IS NULL
               ORDER BY title ASC, id ASC"#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(map_tag).collect())
    }

    async fn update(&self, id: i64, title: &str, color: &str) -> anyhow::Result<Option<Tag>> {
        let row = sqlx::query(
            r#"UPDATE tags SET title = $2, color = $3, updated_at = now()
               WHERE id = $1 AND deleted_at IS NULL
               RETURNING id, project_id, title, color, created_at, updated_at"#,
        )
        .bind(id)
        .bind(title)
        .bind(color)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(map_tag))
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        let res =
            sqlx::query("UPDATE tags SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(res.rows_affected() > 0)
    }
}
