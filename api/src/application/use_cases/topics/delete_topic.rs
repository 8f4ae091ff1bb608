use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::topic_repository::TopicRepository;
use crate::domain::topics::Topic;

pub struct DeleteTopic<'a, R: TopicRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TopicRepository + ?Sized> DeleteTopic<'a, R> {
    pub async fn execute(&self, topic: &Topic) -> ServiceResult<()> {
        if self.repo.soft_delete(topic.id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}
