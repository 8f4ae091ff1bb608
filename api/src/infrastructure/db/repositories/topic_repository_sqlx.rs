use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::topic_repository::{NewTopic, TopicChanges, TopicRepository};
use crate::domain::topics::Topic;
use crate::infrastructure::db::PgPool;

pub struct SqlxTopicRepository {
    pub pool: PgPool,
}

impl SqlxTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// The owning project comes from the meeting; a topic of a deleted meeting is gone too.
const SELECT: &str = r#"
    SELECT t.id, t.meeting_id, m.project_id, t.title, t.description, t.creator_id,
           t.solution_id, t.closed_at, t.force_solution, t.priority_id,
           t.created_at, t.updated_at,
           COALESCE((SELECT array_agg(a.user_id ORDER BY a.user_id)
                     FROM topic_user_assignments a WHERE a.topic_id = t.id),
                    '{}') AS assigned_users,
           COALESCE((SELECT array_agg(x.tag_id ORDER BY x.tag_id)
                     FROM topic_tag_assignments x
                     JOIN tags tg ON tg.id = x.tag_id AND tg.deleted_at IS NULL
                     WHERE x.topic_id = t.id),
                    '{}') AS tag_ids
    FROM topics t
    JOIN meetings m ON m.id = t.meeting_id AND m.deleted_at IS NULL"#;

fn map_topic(r: PgRow) -> Topic {
    Topic {
        id: r.get("id"),
        meeting_id: r.get("meeting_id"),
        project_id: r.get("project_id"),
        title: r.get("title"),
        description: r.get("description"),
        creator_id: r.get("creator_id"),
        solution_id: r.get("solution_id"),
        closed_at: r.get("closed_at"),
        force_solution: r.get("force_solution"),
        priority_id: r.get("priority_id"),
        assigned_users: r.get("assigned_users"),
        tag_ids: r.get("tag_ids"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl TopicRepository for SqlxTopicRepository {
    async fn create(&self, topic: &NewTopic) -> anyhow::Result<Topic> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO topics (meeting_id, title, description, creator_id, force_solution, priority_id)
               VALUES ($1, $2, $3, $4, $5, $6) RETURNING id"#,
        )
        .bind(topic.meeting_id)
        .bind(&topic.title)
        .bind(&topic.description)
        .bind(&topic.creator_id)
        .bind(topic.force_solution)
        .bind(topic.priority_id)
        .fetch_one(&self.pool)
        .await?;
        self.find(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("topic {id} vanished after insert"))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Topic>> {
        let sql = format!("{SELECT} WHERE t.id = $1 AND t.deleted_at IS NULL");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_topic))
    }

    async fn list_for_meeting(&self, meeting_id: i64) -> anyhow::Result<Vec<Topic>> {
        let sql = format!(
            "{SELECT} WHERE t.meeting_id = $1 AND t.deleted_at IS NULL ORDER BY t.id"
        );
        let rows = sqlx::query(&sql)
            .bind(meeting_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(map_topic).collect())
    }

    async fn update(&self, id: i64, changes: &TopicChanges) -> anyhow::Result<Option<Topic>> {
        let res = sqlx::query(
            r#"UPDATE topics
               SET title = $2, description = $3, force_solution = $4, priority_id = $5,
                   updated_at = now()
               WHERE id = $1 AND deleted_at IS NULL"#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.force_solution)
        .bind(changes.priority_id)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        let res =
            sqlx::query("UPDATE topics SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn set_closed(
        &self,
        id: i64,
        closed_at: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Option<Topic>> {
        let res = sqlx::query(
            "UPDATE topics SET closed_at = $2, updated_at = now() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(closed_at)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }

    async fn set_solution(
        &self,
        id: i64,
        comment_id: Option<i64>,
    ) -> anyhow::Result<Option<Topic>> {
        let res = sqlx::query(
            "UPDATE topics SET solution_id = $2, updated_at = now() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(comment_id)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }
}
