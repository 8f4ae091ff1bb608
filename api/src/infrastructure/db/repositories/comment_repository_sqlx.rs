use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::comment_repository::CommentRepository;
use crate::domain::comments::{Comment, CommentScope};
use crate::infrastructure::db::PgPool;

pub struct SqlxCommentRepository {
    pub pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str =
    "id, author_id, content, project_id, meeting_id, topic_id, action_id, created_at, updated_at";

fn map_comment(r: PgRow) -> Comment {
    Comment {
        id: r.get("id"),
        author_id: r.get("author_id"),
        content: r.get("content"),
        project_id: r.get("project_id"),
        meeting_id: r.get("meeting_id"),
        topic_id: r.get("topic_id"),
        action_id: r.get("action_id"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

// (meeting_id, topic_id, action_id) stored for a scope
fn scope_columns(scope: &CommentScope) -> (Option<i64>, Option<i64>, Option<i64>) {
    match *scope {
        CommentScope::Project(_) => (None, None, None),
        CommentScope::Meeting { meeting_id, .. } => (Some(meeting_id), None, None),
        CommentScope::Topic {
            meeting_id,
            topic_id,
            ..
        } => (Some(meeting_id), Some(topic_id), None),
        CommentScope::Action { action_id, .. } => (None, None, Some(action_id)),
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn create(
        &self,
        author_id: &str,
        scope: &CommentScope,
        content: &str,
    ) -> anyhow::Result<Comment> {
        let (meeting_id, topic_id, action_id) = scope_columns(scope);
        let sql = format!(
            "INSERT INTO comments (author_id, content, project_id, meeting_id, topic_id, action_id)
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(author_id)
            .bind(content)
            .bind(scope.project_id())
            .bind(meeting_id)
            .bind(topic_id)
            .bind(action_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(map_comment(row))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Comment>> {
        let sql = format!("SELECT {COLUMNS} FROM comments WHERE id = $1 AND deleted_at IS NULL");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_comment))
    }

    async fn list_for_scope(&self, scope: &CommentScope) -> anyhow::Result<Vec<Comment>> {
        let (meeting_id, topic_id, action_id) = scope_columns(scope);
        // IS NOT DISTINCT FROM matches NULL columns exactly
        let sql = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE project_id = $1
               AND meeting_id IS NOT DISTINCT FROM $2
               AND topic_id IS NOT DISTINCT FROM $3
               AND action_id IS NOT DISTINCT FROM $4
               AND deleted_at IS NULL
             ORDER BY created_at, id"
        );
        let rows = sqlx::query(&sql)
            .bind(scope.project_id())
            .bind(meeting_id)
            .bind(topic_id)
            .bind(action_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(map_comment).collect())
    }

    async fn update_content(&self, id: i64, content: &str) -> anyhow::Result<Option<Comment>> {
        let sql = format!(
            "UPDATE comments SET content = $2, updated_at = now()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(content)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_comment))
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            "UPDATE comments SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
