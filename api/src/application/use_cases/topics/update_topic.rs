use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::priority_repository::PriorityRepository;
use crate::application::ports::topic_repository::{TopicChanges, TopicRepository};
use crate::application::use_cases::priorities;
use crate::domain::topics::Topic;

pub struct UpdateTopic<'a, T, P>
where
    T: TopicRepository + ?Sized,
    P: PriorityRepository + ?Sized,
{
    pub topics: &'a T,
    pub priorities: &'a P,
}

impl<'a, T, P> UpdateTopic<'a, T, P>
where
    T: TopicRepository + ?Sized,
    P: PriorityRepository + ?Sized,
{
    pub async fn execute(
        &self,
        project_id: i64,
        topic: &Topic,
        input: TopicChanges,
    ) -> ServiceResult<Topic> {
        super::validate(&input)?;
        priorities::ensure_in_project(self.priorities, project_id, input.priority_id).await?;
        self.topics
            .update(topic.id, &input)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
