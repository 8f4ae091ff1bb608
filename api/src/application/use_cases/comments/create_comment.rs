use crate::application::errors::ServiceResult;
use crate::application::ports::comment_repository::CommentRepository;
use crate::application::validation;
use crate::domain::comments::{Comment, CommentScope};

pub struct CreateComment<'a, R: CommentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CommentRepository + ?Sized> CreateComment<'a, R> {
    pub async fn execute(
        &self,
        author_id: &str,
        scope: &CommentScope,
        content: &str,
    ) -> ServiceResult<Comment> {
        validation::comment_content(content)?;
        Ok(self.repo.create(author_id, scope, content).await?)
    }
}
