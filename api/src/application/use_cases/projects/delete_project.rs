use crate::application::access;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::project_repository::ProjectRepository;
use crate::domain::projects::Project;

pub struct DeleteProject<'a, R: ProjectRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProjectRepository + ?Sized> DeleteProject<'a, R> {
    pub async fn execute(&self, project: &Project, user_id: &str) -> ServiceResult<()> {
        access::require_owner(project, user_id)?;
        if self.repo.soft_delete(project.id).await? {
            tracing::info!(project_id = project.id, user_id = %user_id, "project_deleted");
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}
