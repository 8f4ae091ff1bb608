use crate::application::access;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::topic_repository::TopicRepository;
use crate::domain::meetings::Meeting;
use crate::domain::topics::Topic;

pub struct GetTopic<'a, R: TopicRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TopicRepository + ?Sized> GetTopic<'a, R> {
    /// The topic must sit in `meeting` and belong to the meeting's project.
    pub async fn execute(&self, meeting: &Meeting, topic_id: i64) -> ServiceResult<Topic> {
        let topic = access::scoped(self.repo.find(topic_id).await?, meeting.project_id)?;
        if topic.meeting_id != meeting.id {
            return Err(ServiceError::NotFound);
        }
        Ok(topic)
    }
}
