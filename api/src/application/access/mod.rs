use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::project_repository::ProjectRepository;
use crate::domain::ownership::ProjectOwned;
use crate::domain::projects::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Capability {
    None,
    Member,
    Owner,
}

pub fn capability(project: &Project, members: &[String], user_id: &str) -> Capability {
    if project.is_owner(user_id) {
        Capability::Owner
    } else if members.iter().any(|m| m == user_id) {
        Capability::Member
    } else {
        Capability::None
    }
}

/// Owner always has access; everyone else needs an explicit grant.
pub fn has_access(project: &Project, members: &[String], user_id: &str) -> bool {
    capability(project, members, user_id) >= Capability::Member
}

/// Loads a project and checks that `user_id` may work inside it.
pub async fn resolve_project<R>(repo: &R, project_id: i64, user_id: &str) -> ServiceResult<Project>
where
    R: ProjectRepository + ?Sized,
{
    let project = repo
        .find(project_id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    if project.is_owner(user_id) {
        return Ok(project);
    }
    let members = repo.member_ids(project_id).await?;
    if has_access(&project, &members, user_id) {
        Ok(project)
    } else {
        Err(ServiceError::NoAccess)
    }
}

pub fn require_owner(project: &Project, user_id: &str) -> ServiceResult<()> {
    if project.is_owner(user_id) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden("only the project owner can do this"))
    }
}

/// Checks that another user (e.g. an assignee) can see the project.
pub async fn require_project_user<R>(repo: &R, project: &Project, user_id: &str) -> ServiceResult<()>
where
    R: ProjectRepository + ?Sized,
{
    if project.is_owner(user_id) {
        return Ok(());
    }
    let members = repo.member_ids(project.id).await?;
    if has_access(project, &members, user_id) {
        Ok(())
    } else {
        Err(ServiceError::validation("user has no access to the project"))
    }
}

/// Turns a lookup result into an entity of `project_id`, hiding entities of other projects.
pub fn scoped<T: ProjectOwned>(entity: Option<T>, project_id: i64) -> ServiceResult<T> {
    match entity {
        Some(e) if e.belongs_to_project(project_id) => Ok(e),
        _ => Err(ServiceError::NotFound),
    }
}
