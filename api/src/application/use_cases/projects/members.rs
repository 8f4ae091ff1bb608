use crate::application::access;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::notification_repository::NotificationRepository;
use crate::application::ports::project_repository::ProjectRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::notifications::NewNotification;
use crate::domain::projects::Project;

pub struct ListProjectUsers<'a, R: ProjectRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProjectRepository + ?Sized> ListProjectUsers<'a, R> {
    /// Owner first, then explicitly granted users.
    pub async fn execute(&self, project: &Project) -> ServiceResult<Vec<String>> {
        let mut users = vec![project.owner_id.clone()];
        for id in self.repo.member_ids(project.id).await? {
            if !users.contains(&id) {
                users.push(id);
            }
        }
        Ok(users)
    }
}

pub struct GrantAccess<'a, P, U, N>
where
    P: ProjectRepository + ?Sized,
    U: UserRepository + ?Sized,
    N: NotificationRepository + ?Sized,
{
    pub projects: &'a P,
    pub users: &'a U,
    pub notifications: &'a N,
}

impl<'a, P, U, N> GrantAccess<'a, P, U, N>
where
    P: ProjectRepository + ?Sized,
    U: UserRepository + ?Sized,
    N: NotificationRepository + ?Sized,
{
    pub async fn execute(
        &self,
        project: &Project,
        acting_user: &str,
        user_id: &str,
    ) -> ServiceResult<()> {
        access::require_owner(project, acting_user)?;
        if project.is_owner(user_id) {
            return Err(ServiceError::validation("the owner already has access"));
        }
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::validation("unknown user"));
        }
        if self.projects.add_member(project.id, user_id).await? {
            tracing::info!(project_id = project.id, user_id = %user_id, "project_access_granted");
            self.notifications
                .create(&NewNotification {
                    user_id: user_id.to_string(),
                    title: "You were added to a project".into(),
                    suffix: project.name.clone(),
                    description: format!("{} gave you access to {}", acting_user, project.name),
                    link: format!("/project/{}", project.id),
                    link_title: "Open project".into(),
                })
                .await?;
        }
        Ok(())
    }
}

pub struct RevokeAccess<'a, P: ProjectRepository + ?Sized> {
    pub projects: &'a P,
}

impl<'a, P: ProjectRepository + ?Sized> RevokeAccess<'a, P> {
    pub async fn execute(
        &self,
        project: &Project,
        acting_user: &str,
        user_id: &str,
    ) -> ServiceResult<()> {
        access::require_owner(project, acting_user)?;
        if self.projects.remove_member(project.id, user_id).await? {
            tracing::info!(project_id = project.id, user_id = %user_id, "project_access_revoked");
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn grant_notifies_once_and_revoke_removes_access() {
        let store = MemoryStore::default();
        store.ensure_user("alice").await.unwrap();
        store.ensure_user("bob").await.unwrap();
        let project = ProjectRepository::create(&store, "alice", "Board", "")
            .await
            .unwrap();

        let grant = GrantAccess {
            projects: &store,
            users: &store,
            notifications: &store,
        };
        grant.execute(&project, "alice", "bob").await.unwrap();
        grant.execute(&project, "alice", "bob").await.unwrap();
        assert_eq!(store.list_for_user("bob", false).await.unwrap().len(), 1);

        let users = ListProjectUsers { repo: &store }
            .execute(&project)
            .await
            .unwrap();
        assert_eq!(users, vec!["alice".to_string(), "bob".to_string()]);

        let revoke = RevokeAccess { projects: &store };
        revoke.execute(&project, "alice", "bob").await.unwrap();
        assert!(matches!(
            revoke.execute(&project, "alice", "bob").await,
            Err(ServiceError::NotFound)
        ));
        assert!(store.member_ids(project.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn only_owner_grants_known_users() {
        let store = MemoryStore::default();
        store.ensure_user("bob").await.unwrap();
        let project = ProjectRepository::create(&store, "alice", "Board", "")
            .await
            .unwrap();
        let grant = GrantAccess {
            projects: &store,
            users: &store,
            notifications: &store,
        };
        assert!(matches!(
            grant.execute(&project, "bob", "bob").await,
            Err(ServiceError::Forbidden(_))
        ));
        assert!(matches!(
            grant.execute(&project, "alice", "nobody").await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            grant.execute(&project, "alice", "alice").await,
            Err(ServiceError::Validation(_))
        ));
    }
}
