use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::meetings::Meeting;

#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub project_id: i64,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub creator_id: String,
}

#[derive(Debug, Clone)]
pub struct MeetingChanges {
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    async fn create(&self, meeting: &NewMeeting) -> anyhow::Result<Meeting>;
    async fn find(&self, id: i64) -> anyhow::Result<Option<Meeting>>;
    async fn list_for_project(&self, project_id: i64) -> anyhow::Result<Vec<Meeting>>;
    async fn update(&self, id: i64, changes: &MeetingChanges) -> anyhow::Result<Option<Meeting>>;
    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool>;
}
