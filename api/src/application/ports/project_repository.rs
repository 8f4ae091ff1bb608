use async_trait::async_trait;

use crate::domain::projects::Project;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, owner_id: &str, name: &str, description: &str)
    -> anyhow::Result<Project>;

    async fn find(&self, id: i64) -> anyhow::Result<Option<Project>>;

    async fn list_owned(&self, user_id: &str) -> anyhow::Result<Vec<Project>>;

    // Projects the user was explicitly granted access to
    async fn list_granted(&self, user_id: &str) -> anyhow::Result<Vec<Project>>;

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> anyhow::Result<Option<Project>>;

    // false when the project does not exist or is already deleted
    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool>;

    async fn member_ids(&self, id: i64) -> anyhow::Result<Vec<String>>;

    // true when the grant was newly created
    async fn add_member(&self, id: i64, user_id: &str) -> anyhow::Result<bool>;

    async fn remove_member(&self, id: i64, user_id: &str) -> anyhow::Result<bool>;
}
