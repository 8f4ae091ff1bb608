use async_trait::async_trait;

use crate::domain::comments::{Comment, CommentScope};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(
        &self,
        author_id: &str,
        scope: &CommentScope,
        content: &str,
    ) -> anyhow::Result<Comment>;
    async fn find(&self, id: i64) -> anyhow::Result<Option<Comment>>;
    async fn list_for_scope(&self, scope: &CommentScope) -> anyhow::Result<Vec<Comment>>;
    async fn update_content(&self, id: i64, content: &str) -> anyhow::Result<Option<Comment>>;
    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool>;
}
