use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::topics::Topic;

#[derive(Debug, Clone)]
pub struct NewTopic {
    pub meeting_id: i64,
    pub title: String,
    pub description: String,
    pub creator_id: String,
    pub force_solution: bool,
    pub priority_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct TopicChanges {
    pub title: String,
    pub description: String,
    pub force_solution: bool,
    pub priority_id: Option<i64>,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create(&self, topic: &NewTopic) -> anyhow::Result<Topic>;

    /// Loads the topic together with the project of its meeting.
    async fn find(&self, id: i64) -> anyhow::Result<Option<Topic>>;

    async fn list_for_meeting(&self, meeting_id: i64) -> anyhow::Result<Vec<Topic>>;
    async fn update(&self, id: i64, changes: &TopicChanges) -> anyhow::Result<Option<Topic>>;
    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool>;

    // None reopens the topic
    async fn set_closed(
        &self,
        id: i64,
        closed_at: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Option<Topic>>;

    async fn set_solution(
        &self,
        id: i64,
        comment_id: Option<i64>,
    ) -> anyhow::Result<Option<Topic>>;
}
