use std::sync::Arc;

use crate::application::ports::action_repository::ActionRepository;
use crate::application::ports::assignment_repository::AssignmentRepository;
use crate::application::ports::comment_repository::CommentRepository;
use crate::application::ports::meeting_repository::MeetingRepository;
use crate::application::ports::notification_repository::NotificationRepository;
use crate::application::ports::priority_repository::PriorityRepository;
use crate::application::ports::project_repository::ProjectRepository;
use crate::application::ports::tag_repository::TagRepository;
use crate::application::ports::topic_repository::TopicRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    project_repo: Arc<dyn ProjectRepository>,
    meeting_repo: Arc<dyn MeetingRepository>,
    topic_repo: Arc<dyn TopicRepository>,
    action_repo: Arc<dyn ActionRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    tag_repo: Arc<dyn TagRepository>,
    priority_repo: Arc<dyn PriorityRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
}

impl AppServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        meeting_repo: Arc<dyn MeetingRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        action_repo: Arc<dyn ActionRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        tag_repo: Arc<dyn TagRepository>,
        priority_repo: Arc<dyn PriorityRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        assignment_repo: Arc<dyn AssignmentRepository>,
    ) -> Self {
        Self {
            user_repo,
            project_repo,
            meeting_repo,
            topic_repo,
            action_repo,
            comment_repo,
            tag_repo,
            priority_repo,
            notification_repo,
            assignment_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn project_repo(&self) -> Arc<dyn ProjectRepository> {
        self.services.project_repo.clone()
    }

    pub fn meeting_repo(&self) -> Arc<dyn MeetingRepository> {
        self.services.meeting_repo.clone()
    }

    pub fn topic_repo(&self) -> Arc<dyn TopicRepository> {
        self.services.topic_repo.clone()
    }

    pub fn action_repo(&self) -> Arc<dyn ActionRepository> {
        self.services.action_repo.clone()
    }

    pub fn comment_repo(&self) -> Arc<dyn CommentRepository> {
        self.services.comment_repo.clone()
    }

    pub fn tag_repo(&self) -> Arc<dyn TagRepository> {
        self.services.tag_repo.clone()
    }

    pub fn priority_repo(&self) -> Arc<dyn PriorityRepository> {
        self.services.priority_repo.clone()
    }

    pub fn notification_repo(&self) -> Arc<dyn NotificationRepository> {
        self.services.notification_repo.clone()
    }

    pub fn assignment_repo(&self) -> Arc<dyn AssignmentRepository> {
        self.services.assignment_repo.clone()
    }
}
