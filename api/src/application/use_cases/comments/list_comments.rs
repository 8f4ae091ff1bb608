use crate::application::errors::ServiceResult;
use crate::application::ports::comment_repository::CommentRepository;
use crate::domain::comments::{Comment, CommentScope};

pub struct ListComments<'a, R: CommentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CommentRepository + ?Sized> ListComments<'a, R> {
    pub async fn execute(&self, scope: &CommentScope) -> ServiceResult<Vec<Comment>> {
        Ok(self.repo.list_for_scope(scope).await?)
    }
}
