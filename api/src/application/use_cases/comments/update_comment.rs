use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::comment_repository::CommentRepository;
use crate::application::validation;
use crate::domain::comments::{Comment, CommentScope};

pub struct UpdateComment<'a, R: CommentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CommentRepository + ?Sized> UpdateComment<'a, R> {
    pub async fn execute(
        &self,
        user_id: &str,
        scope: &CommentScope,
        comment_id: i64,
        content: &str,
    ) -> ServiceResult<Comment> {
        validation::comment_content(content)?;
        let comment = super::authored_in_scope(self.repo, scope, comment_id, user_id).await?;
        self.repo
            .update_content(comment.id, content)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::comments::create_comment::CreateComment;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn only_author_edits_within_scope() {
        let store = MemoryStore::default();
        let scope = CommentScope::Project(1);
        let comment = CreateComment { repo: &store }
            .execute("alice", &scope, "draft")
            .await
            .unwrap();
        let uc = UpdateComment { repo: &store };

        assert!(matches!(
            uc.execute("bob", &scope, comment.id, "hijacked").await,
            Err(ServiceError::Forbidden(_))
        ));
        assert!(matches!(
            uc.execute("alice", &CommentScope::Project(2), comment.id, "moved")
                .await,
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            uc.execute("alice", &scope, comment.id, "   ").await,
            Err(ServiceError::Validation(_))
        ));

        let edited = uc
            .execute("alice", &scope, comment.id, "final")
            .await
            .unwrap();
        assert_eq!(edited.content, "final");
    }
}
