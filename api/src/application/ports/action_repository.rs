use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::actions::{Action, ActionStateFilter};

#[derive(Debug, Clone)]
pub struct NewAction {
    pub project_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub priority_id: Option<i64>,
    pub creator_id: String,
}

#[derive(Debug, Clone)]
pub struct ActionChanges {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub priority_id: Option<i64>,
}

#[async_trait]
pub trait ActionRepository: Send + Sync {
    async fn create(&self, action: &NewAction) -> anyhow::Result<Action>;
    async fn find(&self, id: i64) -> anyhow::Result<Option<Action>>;
    async fn list_for_project(
        &self,
        project_id: i64,
        state: ActionStateFilter,
    ) -> anyhow::Result<Vec<Action>>;
    async fn update(&self, id: i64, changes: &ActionChanges) -> anyhow::Result<Option<Action>>;
    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool>;
    async fn set_closed(
        &self,
        id: i64,
        closed_at: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Option<Action>>;
}
