use chrono::{DateTime, Utc};

/// Task derived from one or more topics.
#[derive(Debug, Clone)]
pub struct Action {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub priority_id: Option<i64>,
    pub closed_at: Option<DateTime<Utc>>,
    pub creator_id: String,
    pub assigned_users: Vec<String>,
    pub tag_ids: Vec<i64>,
    pub topic_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filter for action listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStateFilter {
    #[default]
    All,
    Open,
    Closed,
}
