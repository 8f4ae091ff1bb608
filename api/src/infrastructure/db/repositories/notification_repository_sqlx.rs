use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::notification_repository::NotificationRepository;
use crate::domain::notifications::{NewNotification, Notification};
use crate::infrastructure::db::PgPool;

pub struct SqlxNotificationRepository {
    pub pool: PgPool,
}

impl SqlxNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_notification(r: PgRow) -> Notification {
    Notification {
        id: r.get("id"),
        user_id: r.get("user_id"),
        title: r.get("title"),
        suffix: r.get("suffix"),
        description: r.get("description"),
        link: r.get("link"),
        link_title: r.get("link_title"),
        read_at: r.get("read_at"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl NotificationRepository for SqlxNotificationRepository {
    async fn create(&self, n: &NewNotification) -> anyhow::Result<Notification> {
        let row = sqlx::query(
            r#"INSERT INTO notifications (user_id, title, suffix, description, link, link_title)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, user_id, title, suffix, description, link, link_title, read_at, created_at"#,
        )
        .bind(&n.user_id)
        .bind(&n.title)
        .bind(&n.suffix)
        .bind(&n.description)
        .bind(&n.link)
        .bind(&n.link_title)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_notification(row))
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        unread_only: bool,
    ) -> anyhow::Result<Vec<Notification>> {
        let rows = sqlx::query(
            r#"SELECT id, user_id, title, suffix, description, link, link_title, read_at, created_at
               FROM notifications
               WHERE user_id = $1 AND ($2 = FALSE OR read_at IS NULL)
               ORDER BY created_at DESC, id DESC"#,
        )
        .bind(user_id)
        .bind(unread_only)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(map_notification).collect())
    }

    async fn mark_read(&self, id: i64, user_id: &str) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"UPDATE notifications SET read_at = COALESCE(read_at, now())
               WHERE id = $1 AND user_id = $2"#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn mark_all_read(&self, user_id: &str) -> anyhow::Result<u64> {
        let res = sqlx::query(
            "UPDATE notifications SET read_at = now() WHERE user_id = $1 AND read_at IS NULL",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    async fn delete(&self, id: i64, user_id: &str) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM notifications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
