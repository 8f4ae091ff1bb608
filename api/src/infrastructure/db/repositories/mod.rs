pub mod action_repository_sqlx;
pub mod assignment_repository_sqlx;
pub mod comment_repository_sqlx;
pub mod meeting_repository_sqlx;
pub mod notification_repository_sqlx;
pub mod priority_repository_sqlx;
pub mod project_repository_sqlx;
pub mod tag_repository_sqlx;
pub mod topic_repository_sqlx;
pub mod user_repository_sqlx;
