use async_trait::async_trait;

use crate::application::ports::assignment_repository::{AssignmentRepository, AssignmentTarget};
use crate::infrastructure::db::PgPool;

pub struct SqlxAssignmentRepository {
    pub pool: PgPool,
}

impl SqlxAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// (table, key column) of the user association for a target
fn user_table(target: AssignmentTarget) -> (&'static str, &'static str) {
    match target {
        AssignmentTarget::Meeting(_) => ("meeting_user_assignments", "meeting_id"),
        AssignmentTarget::Topic(_) => ("topic_user_assignments", "topic_id"),
        AssignmentTarget::Action(_) => ("action_user_assignments", "action_id"),
    }
}

fn tag_table(target: AssignmentTarget) -> (&'static str, &'static str) {
    match target {
        AssignmentTarget::Meeting(_) => ("meeting_tag_assignments", "meeting_id"),
        AssignmentTarget::Topic(_) => ("topic_tag_assignments", "topic_id"),
        AssignmentTarget::Action(_) => ("action_tag_assignments", "action_id"),
    }
}

#[async_trait]
impl AssignmentRepository for SqlxAssignmentRepository {
    async fn assign_user(&self, target: AssignmentTarget, user_id: &str) -> anyhow::Result<bool> {
        let (table, key) = user_table(target);
        let sql =
            format!("INSERT INTO {table} ({key}, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING");
        let res = sqlx::query(&sql)
            .bind(target.id())
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn unassign_user(
        &self,
        target: AssignmentTarget,
        user_id: &str,
    ) -> anyhow::Result<bool> {
        let (table, key) = user_table(target);
        let sql = format!("DELETE FROM {table} WHERE {key} = $1 AND user_id = $2");
        let res = sqlx::query(&sql)
            .bind(target.id())
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn link_tag(&self, target: AssignmentTarget, tag_id: i64) -> anyhow::Result<bool> {
        let (table, key) = tag_table(target);
        let sql =
            format!("INSERT INTO {table} ({key}, tag_id) VALUES ($1, $2) ON CONFLICT DO NOTHING");
        let res = sqlx::query(&sql)
            .bind(target.id())
            .bind(tag_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn unlink_tag(&self, target: AssignmentTarget, tag_id: i64) -> anyhow::Result<bool> {
        let (table, key) = tag_table(target);
        let sql = format!("DELETE FROM {table} WHERE {key} = $1 AND tag_id = $2");
        let res = sqlx::query(&sql)
            .bind(target.id())
            .bind(tag_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn link_action_topic(&self, action_id: i64, topic_id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"INSERT INTO action_topic_assignments (action_id, topic_id) VALUES ($1, $2)
               ON CONFLICT DO NOTHING"#,
        )
        .bind(action_id)
        .bind(topic_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn unlink_action_topic(&self, action_id: i64, topic_id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            "DELETE FROM action_topic_assignments WHERE action_id = $1 AND topic_id = $2",
        )
        .bind(action_id)
        .bind(topic_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
