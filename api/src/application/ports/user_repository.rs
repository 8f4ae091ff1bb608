use async_trait::async_trait;

use crate::domain::users::User;

/// Returned by [`UserRepository::set_name`] when another user already holds the name.
#[derive(Debug, thiserror::Error)]
#[error("user name is already taken")]
pub struct NameTaken;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates the user row on first sight; no-op when it already exists.
    async fn ensure_user(&self, id: &str) -> anyhow::Result<()>;
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<User>>;
    /// Fails with [`NameTaken`] when the name belongs to someone else.
    async fn set_name(&self, id: &str, name: &str) -> anyhow::Result<Option<User>>;
}
