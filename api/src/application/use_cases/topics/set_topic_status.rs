use chrono::Utc;

use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::topic_repository::TopicRepository;
use crate::domain::topics::Topic;

pub struct SetTopicStatus<'a, R: TopicRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TopicRepository + ?Sized> SetTopicStatus<'a, R> {
    /// Closing keeps an existing close timestamp; reopening clears it.
    pub async fn execute(&self, topic: &Topic, closed: bool) -> ServiceResult<Topic> {
        let closed_at = if closed {
            if topic.force_solution && topic.solution_id.is_none() {
                return Err(ServiceError::validation(
                    "topic requires a solution before it can be closed",
                ));
            }
            Some(topic.closed_at.unwrap_or_else(Utc::now))
        } else {
            None
        };
        self.repo
            .set_closed(topic.id, closed_at)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
