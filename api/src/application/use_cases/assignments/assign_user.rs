use crate::application::access;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::assignment_repository::{AssignmentRepository, AssignmentTarget};
use crate::application::ports::notification_repository::NotificationRepository;
use crate::application::ports::project_repository::ProjectRepository;
use crate::domain::actions::Action;
use crate::domain::meetings::Meeting;
use crate::domain::notifications::NewNotification;
use crate::domain::projects::Project;
use crate::domain::topics::Topic;

/// The entity a user gets assigned to, with what the notification should show.
#[derive(Debug, Clone)]
pub struct AssignmentSubject {
    pub target: AssignmentTarget,
    pub title: String,
    pub link: String,
}

impl AssignmentSubject {
    pub fn meeting(meeting: &Meeting) -> Self {
        Self {
            target: AssignmentTarget::Meeting(meeting.id),
            title: meeting.name.clone(),
            link: format!("/project/{}/meeting/{}", meeting.project_id, meeting.id),
        }
    }

    pub fn topic(project_id: i64, topic: &Topic) -> Self {
        Self {
            target: AssignmentTarget::Topic(topic.id),
            title: topic.title.clone(),
            link: format!(
                "/project/{}/meeting/{}/topic/{}",
                project_id, topic.meeting_id, topic.id
            ),
        }
    }

    pub fn action(action: &Action) -> Self {
        Self {
            target: AssignmentTarget::Action(action.id),
            title: action.title.clone(),
            link: format!("/project/{}/action/{}", action.project_id, action.id),
        }
    }
}

pub struct AssignUser<'a, P, A, N>
where
    P: ProjectRepository + ?Sized,
    A: AssignmentRepository + ?Sized,
    N: NotificationRepository + ?Sized,
{
    pub projects: &'a P,
    pub assignments: &'a A,
    pub notifications: &'a N,
}

impl<'a, P, A, N> AssignUser<'a, P, A, N>
where
    P: ProjectRepository + ?Sized,
    A: AssignmentRepository + ?Sized,
    N: NotificationRepository + ?Sized,
{
    pub async fn assign(
        &self,
        project: &Project,
        acting_user: &str,
        subject: &AssignmentSubject,
        user_id: &str,
    ) -> ServiceResult<()> {
        access::require_project_user(self.projects, project, user_id).await?;
        let created = self.assignments.assign_user(subject.target, user_id).await?;
        if created && user_id != acting_user {
            let kind = subject.target.kind();
            let article = if kind.starts_with('a') { "an" } else { "a" };
            self.notifications
                .create(&NewNotification {
                    user_id: user_id.to_string(),
                    title: format!("You were assigned to {article} {kind}"),
                    suffix: project.name.clone(),
                    description: subject.title.clone(),
                    link: subject.link.clone(),
                    link_title: format!("Open {kind}"),
                })
                .await?;
        }
        Ok(())
    }

    pub async fn unassign(&self, subject: &AssignmentSubject, user_id: &str) -> ServiceResult<()> {
        if self
            .assignments
            .unassign_user(subject.target, user_id)
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
    use crate::application::ports::action_repository::{ActionChanges, ActionRepository};
    use crate::application::ports::meeting_repository::MeetingRepository;
    use crate::application::ports::topic_repository::{TopicChanges, TopicRepository};
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn assignee_needs_project_access() {
        let store = MemoryStore::default();
        let project = ProjectRepository::create(&store, "alice", "Board", "")
            .await
            .unwrap();
        store.add_member(project.id, "bob").await.unwrap();
        let meeting = store.meeting_fixture(project.id).await;
        let subject = AssignmentSubject::meeting(&meeting);
        let uc = AssignUser {
            projects: &store,
            assignments: &store,
            notifications: &store,
        };

        assert!(matches!(
            uc.assign(&project, "alice", &subject, "mallory").await,
            Err(ServiceError::Validation(_))
        ));
        uc.assign(&project, "alice", &subject, "bob").await.unwrap();
        uc.assign(&project, "alice", &subject, "alice").await.unwrap();

        let reloaded = MeetingRepository::find(&store, meeting.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.assigned_users, vec!["alice", "bob"]);
        // self-assignment does not notify
        assert_eq!(store.list_for_user("bob", false).await.unwrap().len(), 1);
        assert!(store.list_for_user("alice", false).await.unwrap().is_empty());

        uc.unassign(&subject, "bob").await.unwrap();
        assert!(matches!(
            uc.unassign(&subject, "bob").await,
            Err(ServiceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn topic_and_action_assignments_notify_with_links() {
        let store = MemoryStore::default();
        let project = ProjectRepository::create(&store, "alice", "Board", "")
            .await
            .unwrap();
        store.add_member(project.id, "bob").await.unwrap();
        let meeting = store.meeting_fixture(project.id).await;
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
                project.id,
                ActionChanges {
                    title: "Send minutes".into(),
                    description: String::new(),
                    due_date: None,
                    priority_id: None,
                },
            )
            .await;
        let uc = AssignUser {
            projects: &store,
            assignments: &store,
            notifications: &store,
        };

        let on_topic = AssignmentSubject::topic(project.id, &topic);
        let on_action = AssignmentSubject::action(&action);
        uc.assign(&project, "alice", &on_topic, "bob").await.unwrap();
        uc.assign(&project, "alice", &on_action, "bob").await.unwrap();
        // repeated assignment is a no-op and sends nothing new
        uc.assign(&project, "alice", &on_action, "bob").await.unwrap();

        let mut inbox = store.list_for_user("bob", false).await.unwrap();
        inbox.sort_by(|a, b| a.link.cmp(&b.link));
        assert_eq!(inbox.len(), 2);
        assert_eq!(
            inbox[0].link,
            format!("/project/{}/action/{}", project.id, action.id)
        );
        assert_eq!(inbox[0].title, "You were assigned to an action");
        assert_eq!(inbox[0].description, "Send minutes");
        assert_eq!(
            inbox[1].link,
            format!(
                "/project/{}/meeting/{}/topic/{}",
                project.id, meeting.id, topic.id
            )
        );
        assert_eq!(inbox[1].title, "You were assigned to a topic");
        assert_eq!(inbox[1].suffix, "Board");

        let topic = TopicRepository::find(&store, topic.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(topic.assigned_users, vec!["bob"]);
        let action = ActionRepository::find(&store, action.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(action.assigned_users, vec!["bob"]);
    }
}
