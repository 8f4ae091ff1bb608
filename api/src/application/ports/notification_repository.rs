use async_trait::async_trait;

use crate::domain::notifications::{NewNotification, Notification};

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: &NewNotification) -> anyhow::Result<Notification>;
    async fn list_for_user(
        &self,
        user_id: &str,
        unread_only: bool,
    ) -> anyhow::Result<Vec<Notification>>;
    // Scoped to the owner: another user's notification counts as missing
    async fn mark_read(&self, id: i64, user_id: &str) -> anyhow::Result<bool>;
    async fn mark_all_read(&self, user_id: &str) -> anyhow::Result<u64>;
    async fn delete(&self, id: i64, user_id: &str) -> anyhow::Result<bool>;
}
