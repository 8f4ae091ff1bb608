use chrono::{DateTime, Utc};

/// Discussion item of a meeting.
///
/// `project_id` is the project of the owning meeting. It is `None` when the
/// meeting could not be loaded together with the topic.
#[derive(Debug, Clone)]
pub struct Topic {
    pub id: i64,
    pub meeting_id: i64,
    pub project_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub creator_id: String,
    pub solution_id: Option<i64>,
    pub closed_at: Option<DateTime<Utc>>,
    pub force_solution: bool,
    pub priority_id: Option<i64>,
    pub assigned_users: Vec<String>,
    pub tag_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }
}
