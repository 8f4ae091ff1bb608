use crate::application::access;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::assignment_repository::AssignmentRepository;
use crate::application::ports::topic_repository::TopicRepository;
use crate::domain::actions::Action;

pub struct LinkActionTopic<'a, T, AR>
where
    T: TopicRepository + ?Sized,
    AR: AssignmentRepository + ?Sized,
{
    pub topics: &'a T,
    pub assignments: &'a AR,
}

impl<'a, T, AR> LinkActionTopic<'a, T, AR>
where
    T: TopicRepository + ?Sized,
    AR: AssignmentRepository + ?Sized,
{
    pub async fn link(&self, action: &Action, topic_id: i64) -> ServiceResult<()> {
        let topic = access::scoped(self.topics.find(topic_id).await?, action.project_id)?;
        self.assignments
            .link_action_topic(action.id, topic.id)
            .await?;
        Ok(())
    }

    pub async fn unlink(&self, action: &Action, topic_id: i64) -> ServiceResult<()> {
        if self
            .assignments
            .unlink_action_topic(action.id, topic_id)
            .await?
        {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::action_repository::ActionChanges;
    use crate::application::ports::topic_repository::TopicChanges;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn topics_of_other_projects_cannot_be_linked() {
        let store = MemoryStore::default();
        let own_meeting = store.meeting_fixture(1).await;
        let foreign_meeting = store.meeting_fixture(2).await;
        let changes = TopicChanges {
            title: "Budget".into(),
            description: String::new(),
            force_solution: false,
            priority_id: None,
        };
        let own_topic = store.topic_fixture(&own_meeting, changes.clone()).await;
        let foreign_topic = store.topic_fixture(&foreign_meeting, changes).await;
        let action = store
            .action_fixture(
                1,
                ActionChanges {
                    title: "Draft budget".into(),
                    description: String::new(),
                    due_date: None,
                    priority_id: None,
                },
            )
            .await;

        let uc = LinkActionTopic {
            topics: &store,
            assignments: &store,
        };
        assert!(matches!(
            uc.link(&action, foreign_topic.id).await,
            Err(ServiceError::NotFound)
        ));
        uc.link(&action, own_topic.id).await.unwrap();
        let reloaded = crate::application::ports::action_repository::ActionRepository::find(
            &store, action.id,
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(reloaded.topic_ids, vec![own_topic.id]);

        uc.unlink(&action, own_topic.id).await.unwrap();
        assert!(matches!(
            uc.unlink(&action, own_topic.id).await,
            Err(ServiceError::NotFound)
        ));
    }
}
