use crate::application::errors::ServiceResult;
use crate::application::ports::topic_repository::TopicRepository;
use crate::domain::topics::Topic;

pub struct ListTopics<'a, R: TopicRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TopicRepository + ?Sized> ListTopics<'a, R> {
    pub async fn execute(&self, meeting_id: i64) -> ServiceResult<Vec<Topic>> {
        Ok(self.repo.list_for_meeting(meeting_id).await?)
    }
}
