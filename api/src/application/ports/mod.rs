pub mod action_repository;
pub mod assignment_repository;
pub mod comment_repository;
pub mod meeting_repository;
pub mod notification_repository;
pub mod priority_repository;
pub mod project_repository;
pub mod tag_repository;
pub mod topic_repository;
pub mod user_repository;
