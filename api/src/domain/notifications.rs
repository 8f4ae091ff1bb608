use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    /// Shown after the title in the notification view.
    pub suffix: String,
    pub description: String,
    pub link: String,
    pub link_title: String,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewNotification {
    pub user_id: String,
    pub title: String,
    pub suffix: String,
    pub description: String,
    pub link: String,
    pub link_title: String,
}
