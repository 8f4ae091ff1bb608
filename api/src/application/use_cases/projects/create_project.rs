use crate::application::errors::ServiceResult;
use crate::application::ports::project_repository::ProjectRepository;
use crate::application::validation;
use crate::domain::projects::Project;

pub struct CreateProject<'a, R: ProjectRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProjectRepository + ?Sized> CreateProject<'a, R> {
    pub async fn execute(
        &self,
        owner_id: &str,
        name: &str,
        description: &str,
    ) -> ServiceResult<Project> {
        validation::title("name", name, validation::PROJECT_NAME)?;
        validation::short_text(
            "description",
            description,
            validation::PROJECT_DESCRIPTION_MAX,
        )?;
        let project = self.repo.create(owner_id, name, description).await?;
        tracing::info!(project_id = project.id, owner_id = %owner_id, "project_created");
        Ok(project)
    }
}
