use crate::application::access;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::priority_repository::PriorityRepository;

pub struct DeletePriority<'a, R: PriorityRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PriorityRepository + ?Sized> DeletePriority<'a, R> {
    pub async fn execute(&self, project_id: i64, priority_id: i64) -> ServiceResult<()> {
        let existing = access::scoped(self.repo.find(priority_id).await?, project_id)?;
        if self.repo.soft_delete(existing.id).await? {
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
    use crate::application::ports::priority_repository::PriorityInput;
    use crate::application::ports::topic_repository::{TopicChanges, TopicRepository};
    use crate::application::use_cases::actions::update_action::UpdateAction;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn priority_of_other_project_is_not_found() {
        let store = MemoryStore::default();
        let prio = PriorityRepository::create(
            &store,
            1,
            &PriorityInput {
                title: "High".into(),
                weight: 10,
                color: "#ff0000".into(),
            },
        )
        .await
        .unwrap();
        let uc = DeletePriority { repo: &store };
        assert!(matches!(
            uc.execute(2, prio.id).await,
            Err(ServiceError::NotFound)
        ));
        uc.execute(1, prio.id).await.unwrap();
        assert!(matches!(
            uc.execute(1, prio.id).await,
            Err(ServiceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn deleting_priority_detaches_topics_and_actions() {
        let store = MemoryStore::default();
        let prio = PriorityRepository::create(
            &store,
            1,
            &PriorityInput {
                title: "High".into(),
                weight: 10,
                color: "#ff0000".into(),
            },
        )
        .await
        .unwrap();
        let meeting = store.meeting_fixture(1).await;
        let topic = store
            .topic_fixture(
                &meeting,
                TopicChanges {
                    title: "Budget review".into(),
                    description: String::new(),
                    force_solution: false,
                    priority_id: Some(prio.id),
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
                    priority_id: Some(prio.id),
                },
            )
            .await;

        DeletePriority { repo: &store }
            .execute(1, prio.id)
            .await
            .unwrap();

        let topic = TopicRepository::find(&store, topic.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(topic.priority_id, None);
        let action = ActionRepository::find(&store, action.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(action.priority_id, None);

        // resubmitting the action as read must not trip over the old priority
        let resubmitted = ActionChanges {
            title: action.title.clone(),
            description: action.description.clone(),
            due_date: action.due_date,
            priority_id: action.priority_id,
        };
        UpdateAction {
            actions: &store,
            priorities: &store,
        }
        .execute(&action, resubmitted)
        .await
        .unwrap();
    }
}
