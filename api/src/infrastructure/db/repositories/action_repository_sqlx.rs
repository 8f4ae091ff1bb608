use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::action_repository::{ActionChanges, ActionRepository, NewAction};
use crate::domain::actions::{Action, ActionStateFilter};
use crate::infrastructure::db::PgPool;

pub struct SqlxActionRepository {
    pub pool: PgPool,
}

impl SqlxActionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT: &str = r#"
    SELECT a.id, a.project_id, a.title, a.description, a.due_date, a.priority_id, a.closed_at,
           a.creator_id, a.created_at, a.updated_at,
           COALESCE((SELECT array_agg(u.user_id ORDER BY u.user_id)
                     FROM action_user_assignments u WHERE u.action_id = a.id),
                    '{}') AS assigned_users,
           COALESCE((SELECT array_agg(x.tag_id ORDER BY x.tag_id)
                     FROM action_tag_assignments x
                     JOIN tags tg ON tg.id = x.tag_id AND tg.deleted_at IS NULL
                     WHERE x.action_id = a.id),
                    '{}') AS tag_ids,
           COALESCE((SELECT array_agg(y.topic_id ORDER BY y.topic_id)
                     FROM action_topic_assignments y
                     JOIN topics tp ON tp.id = y.topic_id AND tp.deleted_at IS NULL
                     JOIN meetings mm ON mm.id = tp.meeting_id AND mm.deleted_at IS NULL
                     WHERE y.action_id = a.id),
                    '{}') AS topic_ids
    FROM actions a"#;

fn map_action(r: PgRow) -> Action {
    Action {
        id: r.get("id"),
        project_id: r.get("project_id"),
        title: r.get("title"),
        description: r.get("description"),
        due_date: r.get("due_date"),
        priority_id: r.get("priority_id"),
        closed_at: r.get("closed_at"),
        creator_id: r.get("creator_id"),
        assigned_users: r.get("assigned_users"),
        tag_ids: r.get("tag_ids"),
        topic_ids: r.get("topic_ids"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl ActionRepository for SqlxActionRepository {
    async fn create(&self, action: &NewAction) -> anyhow::Result<Action> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO actions (project_id, title, description, due_date, priority_id, creator_id)
               VALUES ($1, $2, $3, $4, $5, $6) RETURNING id"#,
        )
        .bind(action.project_id)
        .bind(&action.title)
        .bind(&action.description)
        .bind(action.due_date)
        .bind(action.priority_id)
        .bind(&action.creator_id)
        .fetch_one(&self.pool)
        .await?;
        self.find(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("action {id} vanished after insert"))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Action>> {
        let sql = format!("{SELECT} WHERE a.id = $1 AND a.deleted_at IS NULL");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_action))
    }

    async fn list_for_project(
        &self,
        project_id: i64,
        state: ActionStateFilter,
    ) -> anyhow::Result<Vec<Action>> {
        let state_clause = match state {
            ActionStateFilter::All => "",
            ActionStateFilter::Open => " AND a.closed_at IS NULL",
            ActionStateFilter::Closed => " AND a.closed_at IS NOT NULL",
        };
        let sql = format!(
            "{SELECT} WHERE a.project_id = $1 AND a.deleted_at IS NULL{state_clause} ORDER BY a.id"
        );
        let rows = sqlx::query(&sql)
            .bind(project_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(map_action).collect())
    }

    async fn update(&self, id: i64, changes: &ActionChanges) -> anyhow::Result<Option<Action>> {
        let res = sqlx::query(
            r#"UPDATE actions
               SET title = $2, description = $3, due_date = $4, priority_id = $5, updated_at = now()
               WHERE id = $1 AND deleted_at IS NULL"#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.due_date)
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
            sqlx::query("UPDATE actions SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn set_closed(
        &self,
        id: i64,
        closed_at: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Option<Action>> {
        let res = sqlx::query(
            "UPDATE actions SET closed_at = $2, updated_at = now() WHERE id = $1 AND deleted_at IS NULL",
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
}
