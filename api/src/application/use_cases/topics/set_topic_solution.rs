use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::comment_repository::CommentRepository;
use crate::application::ports::topic_repository::TopicRepository;
use crate::domain::topics::Topic;

pub struct SetTopicSolution<'a, T, C>
where
    T: TopicRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    pub topics: &'a T,
    pub comments: &'a C,
}

impl<'a, T, C> SetTopicSolution<'a, T, C>
where
    T: TopicRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    /// `None` clears the solution. A solution must be a comment of this topic.
    pub async fn execute(&self, topic: &Topic, comment_id: Option<i64>) -> ServiceResult<Topic> {
        if let Some(id) = comment_id {
            match self.comments.find(id).await? {
                Some(c) if c.topic_id == Some(topic.id) => {}
                _ => {
                    return Err(ServiceError::validation(
                        "solution must be a comment of the topic",
                    ));
                }
            }
        }
        self.topics
            .set_solution(topic.id, comment_id)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
