use async_trait::async_trait;

use crate::domain::tags::Tag;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn create(&self, project_id: i64, title: &str, color: &str) -> anyhow::Result<Tag>;
    async fn find(&self, id: i64) -> anyhow::Result<Option<Tag>>;
    async fn list_for_project(&self, project_id: i64) -> anyhow::Result<Vec<Tag>>;
    async fn update(&self, id: i64, title: &str, color: &str) -> anyhow::Result<Option<Tag>>;
    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool>;
}
