use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Meeting {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub creator_id: String,
    pub assigned_users: Vec<String>,
    pub tag_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
