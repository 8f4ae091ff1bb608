use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::user_repository::{NameTaken, UserRepository};
use crate::domain::users::User;
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_user(r: PgRow) -> User {
    User {
        id: r.get("id"),
        name: r.get("name"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn ensure_user(&self, id: &str) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(r#"SELECT id, name, created_at, updated_at FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_user))
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<User>> {
        let row =
            sqlx::query(r#"SELECT id, name, created_at, updated_at FROM users WHERE name = $1"#)
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(map_user))
    }

    async fn set_name(&self, id: &str, name: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(
            r#"UPDATE users SET name = $2, updated_at = now() WHERE id = $1
               RETURNING id, name, created_at, updated_at"#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => anyhow::Error::new(NameTaken),
            _ => anyhow::Error::new(e),
        })?;
        Ok(row.map(map_user))
    }
}
