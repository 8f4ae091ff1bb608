use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Priority {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub weight: i32,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
