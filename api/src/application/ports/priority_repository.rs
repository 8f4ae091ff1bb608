use async_trait::async_trait;

use crate::domain::priorities::Priority;

#[derive(Debug, Clone)]
pub struct PriorityInput {
    pub title: String,
    pub weight: i32,
    pub color: String,
}

#[async_trait]
pub trait PriorityRepository: Send + Sync {
    async fn create(&self, project_id: i64, input: &PriorityInput) -> anyhow::Result<Priority>;
    async fn find(&self, id: i64) -> anyhow::Result<Option<Priority>>;
    async fn list_for_project(&self, project_id: i64) -> anyhow::Result<Vec<Priority>>;
    async fn update(&self, id: i64, input: &PriorityInput) -> anyhow::Result<Option<Priority>>;
    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool>;
}
