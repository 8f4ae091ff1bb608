use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::project_repository::ProjectRepository;
use crate::domain::projects::Project;
use crate::infrastructure::db::PgPool;

pub struct SqlxProjectRepository {
    pub pool: PgPool,
}

impl SqlxProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str =
    "p.id, p.name, p.description, p.preview_url, p.owner_id, p.ai_enabled, p.created_at, p.updated_at";

fn map_project(r: PgRow) -> Project {
    Project {
        id: r.get("id"),
        name: r.get("name"),
        description: r.get("description"),
        preview_url: r.get("preview_url"),
        owner_id: r.get("owner_id"),
        ai_enabled: r.get("ai_enabled"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepository {
    async fn create(
        &self,
        owner_id: &str,
        name: &str,
        description: &str,
    ) -> anyhow::Result<Project> {
        let row = sqlx::query(
            r#"INSERT INTO projects AS p (owner_id, name, description) VALUES ($1, $2, $3)
               RETURNING p.id, p.name, p.description, p.preview_url, p.owner_id, p.ai_enabled,
                         p.created_at, p.updated_at"#,
        )
        .bind(owner_id)
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_project(row))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Project>> {
        let sql = format!("SELECT {COLUMNS} FROM projects p WHERE p.id = $1 AND p.deleted_at IS NULL");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_project))
    }

    async fn list_owned(&self, user_id: &str) -> anyhow::Result<Vec<Project>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM projects p
             WHERE p.owner_id = $1 AND p.deleted_at IS NULL
             ORDER BY p.id"
        );
        let rows = sqlx::query(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(map_project).collect())
    }

    async fn list_granted(&self, user_id: &str) -> anyhow::Result<Vec<Project>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM projects p
             JOIN project_users pu ON pu.project_id = p.id AND pu.user_id = $1
             WHERE p.deleted_at IS NULL
             ORDER BY p.id"
        );
        let rows = sqlx::query(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(map_project).collect())
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> anyhow::Result<Option<Project>> {
        let row = sqlx::query(
            r#"UPDATE projects AS p SET name = $2, description = $3, updated_at = now()
               WHERE p.id = $1 AND p.deleted_at IS NULL
               RETURNING p.id, p.name, p.description, p.preview_url, p.owner_id, p.ai_enabled,
                         p.created_at, p.updated_at"#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(map_project))
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            "UPDATE projects SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn member_ids(&self, id: i64) -> anyhow::Result<Vec<String>> {
        let rows =
            sqlx::query("SELECT user_id FROM project_users WHERE project_id = $1 ORDER BY user_id")
                .bind(id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|r| r.get("user_id")).collect())
    }

    async fn add_member(&self, id: i64, user_id: &str) -> anyhow::Result<bool> {
        let res = sqlx::query(
            "INSERT INTO project_users (project_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn remove_member(&self, id: i64, user_id: &str) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM project_users WHERE project_id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
