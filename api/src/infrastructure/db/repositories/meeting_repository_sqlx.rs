use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::meeting_repository::{
    MeetingChanges, MeetingRepository, NewMeeting,
};
use crate::domain::meetings::Meeting;
use crate::infrastructure::db::PgPool;

pub struct SqlxMeetingRepository {
    pub pool: PgPool,
}

impl SqlxMeetingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT: &str = r#"
    SELECT m.id, m.project_id, m.name, m.description, m.start_date, m.end_date, m.creator_id,
           m.created_at, m.updated_at,
           COALESCE((SELECT array_agg(a.user_id ORDER BY a.user_id)
                     FROM meeting_user_assignments a WHERE a.meeting_id = m.id),
                    '{}') AS assigned_users,
           COALESCE((SELECT array_agg(t.tag_id ORDER BY t.tag_id)
                     FROM meeting_tag_assignments t
                     JOIN tags tg ON tg.id = t.tag_id AND tg.deleted_at IS NULL
                     WHERE t.meeting_id = m.id),
                    '{}') AS tag_ids
    FROM meetings m"#;

fn map_meeting(r: PgRow) -> Meeting {
    Meeting {
        id: r.get("id"),
        project_id: r.get("project_id"),
        name: r.get("name"),
        description: r.get("description"),
        start_date: r.get("start_date"),
        end_date: r.get("end_date"),
        creator_id: r.get("creator_id"),
        assigned_users: r.get("assigned_users"),
        tag_ids: r.get("tag_ids"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl MeetingRepository for SqlxMeetingRepository {
    async fn create(&self, meeting: &NewMeeting) -> anyhow::Result<Meeting> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO meetings (project_id, name, description, start_date, end_date, creator_id)
               VALUES ($1, $2, $3, $4, $5, $6) RETURNING id"#,
        )
        .bind(meeting.project_id)
        .bind(&meeting.name)
        .bind(&meeting.description)
        .bind(meeting.start_date)
        .bind(meeting.end_date)
        .bind(&meeting.creator_id)
        .fetch_one(&self.pool)
        .await?;
        self.find(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("meeting {id} vanished after insert"))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Meeting>> {
        let sql = format!("{SELECT} WHERE m.id = $1 AND m.deleted_at IS NULL");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_meeting))
    }

    async fn list_for_project(&self, project_id: i64) -> anyhow::Result<Vec<Meeting>> {
        let sql = format!(
            "{SELECT} WHERE m.project_id = $1 AND m.deleted_at IS NULL ORDER BY m.start_date, m.id"
        );
        let rows = sqlx::query(&sql)
            .bind(project_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(map_meeting).collect())
    }

    async fn update(&self, id: i64, changes: &MeetingChanges) -> anyhow::Result<Option<Meeting>> {
        let res = sqlx::query(
            r#"UPDATE meetings
               SET name = $2, description = $3, start_date = $4, end_date = $5, updated_at = now()
               WHERE id = $1 AND deleted_at IS NULL"#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.start_date)
        .bind(changes.end_date)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            "UPDATE meetings SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
