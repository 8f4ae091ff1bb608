use crate::application::errors::ServiceResult;
use crate::application::ports::priority_repository::PriorityRepository;
use crate::application::ports::topic_repository::{NewTopic, TopicChanges, TopicRepository};
use crate::application::use_cases::priorities;
use crate::domain::meetings::Meeting;
use crate::domain::topics::Topic;

pub struct CreateTopic<'a, T, P>
where
    T: TopicRepository + ?Sized,
    P: PriorityRepository + ?Sized,
{
    pub topics: &'a T,
    pub priorities: &'a P,
}

impl<'a, T, P> CreateTopic<'a, T, P>
where
    T: TopicRepository + ?Sized,
    P: PriorityRepository + ?Sized,
{
    pub async fn execute(
        &self,
        meeting: &Meeting,
        creator_id: &str,
        input: TopicChanges,
    ) -> ServiceResult<Topic> {
        super::validate(&input)?;
        priorities::ensure_in_project(self.priorities, meeting.project_id, input.priority_id)
            .await?;
        let topic = self
            .topics
            .create(&NewTopic {
                meeting_id: meeting.id,
                title: input.title,
                description: input.description,
                creator_id: creator_id.to_string(),
                force_solution: input.force_solution,
                priority_id: input.priority_id,
            })
            .await?;
        Ok(topic)
    }
}
