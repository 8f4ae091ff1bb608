pub mod create_comment;
pub mod delete_comment;
pub mod list_comments;
pub mod update_comment;

use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::comment_repository::CommentRepository;
use crate::domain::comments::{Comment, CommentScope};

/// Loads a comment of `scope` that `user_id` authored.
pub(crate) async fn authored_in_scope<R>(
    repo: &R,
    scope: &CommentScope,
    comment_id: i64,
    user_id: &str,
) -> ServiceResult<Comment>
where
    R: CommentRepository + ?Sized,
{
    let comment = match repo.find(comment_id).await? {
        Some(c) if scope.contains(&c) => c,
        _ => return Err(ServiceError::NotFound),
    };
    if comment.author_id != user_id {
        return Err(ServiceError::Forbidden("only the author can change a comment"));
    }
    Ok(comment)
}
