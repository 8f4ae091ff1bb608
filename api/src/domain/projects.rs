use chrono::{DateTime, Utc};

/// Top-level ownership realm. Everything else hangs off a project.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub preview_url: String,
    pub owner_id: String,
    pub ai_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}
