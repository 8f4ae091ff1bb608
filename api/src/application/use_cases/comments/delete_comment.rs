use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::comment_repository::CommentRepository;
use crate::domain::comments::CommentScope;

pub struct DeleteComment<'a, R: CommentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CommentRepository + ?Sized> DeleteComment<'a, R> {
    pub async fn execute(
        &self,
        user_id: &str,
        scope: &CommentScope,
        comment_id: i64,
    ) -> ServiceResult<()> {
        let comment = super::authored_in_scope(self.repo, scope, comment_id, user_id).await?;
        if self.repo.soft_delete(comment.id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::comments::create_comment::CreateComment;
    use crate::application::use_cases::comments::list_comments::ListComments;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn only_author_deletes_and_only_once() {
        let store = MemoryStore::default();
        let scope = CommentScope::Project(1);
        let comment = CreateComment { repo: &store }
            .execute("alice", &scope, "first!")
            .await
            .unwrap();
        let uc = DeleteComment { repo: &store };

        assert!(matches!(
            uc.execute("bob", &scope, comment.id).await,
            Err(ServiceError::Forbidden(_))
        ));
        // wrong scope hides the comment
        assert!(matches!(
            uc.execute("alice", &CommentScope::Project(2), comment.id).await,
            Err(ServiceError::NotFound)
        ));
        uc.execute("alice", &scope, comment.id).await.unwrap();
        assert!(matches!(
            uc.execute("alice", &scope, comment.id).await,
            Err(ServiceError::NotFound)
        ));
        assert!(
            ListComments { repo: &store }
                .execute(&scope)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
