use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::meeting_repository::MeetingRepository;
use crate::domain::meetings::Meeting;

pub struct DeleteMeeting<'a, R: MeetingRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MeetingRepository + ?Sized> DeleteMeeting<'a, R> {
    pub async fn execute(&self, meeting: &Meeting) -> ServiceResult<()> {
        if self.repo.soft_delete(meeting.id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::action_repository::{ActionChanges, ActionRepository};
    use crate::application::ports::assignment_repository::AssignmentRepository;
    use crate::application::ports::topic_repository::{TopicChanges, TopicRepository};
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn topics_vanish_with_their_meeting() {
        let store = MemoryStore::default();
        let meeting = store.meeting_fixture(1).await;
        let topic = store
            .topic_fixture(
                &meeting,
                TopicChanges {
                    title: "Budget review".into(),
                    description: String::new(),
                    force_solution: false,
                    priority_id: None,
                },
            )
            .await;
        let action = store
            .action_fixture(
                1,
                ActionChanges {
                    title: "Send minutes".into(),
                    description: String::new(),
                    due_date: None,
                    priority_id: None,
                },
            )
            .await;
        store.link_action_topic(action.id, topic.id).await.unwrap();

        let uc = DeleteMeeting { repo: &store };
        uc.execute(&meeting).await.unwrap();
        assert!(matches!(
            uc.execute(&meeting).await,
            Err(ServiceError::NotFound)
        ));

        assert!(
            TopicRepository::find(&store, topic.id)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            store
                .list_for_meeting(meeting.id)
                .await
                .unwrap()
                .is_empty()
        );
        let action = ActionRepository::find(&store, action.id)
            .await
            .unwrap()
            .unwrap();
        assert!(action.topic_ids.is_empty());
    }
}
