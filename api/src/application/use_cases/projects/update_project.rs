use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::project_repository::ProjectRepository;
use crate::application::validation;
use crate::domain::projects::Project;

pub struct UpdateProject<'a, R: ProjectRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProjectRepository + ?Sized> UpdateProject<'a, R> {
    pub async fn execute(
        &self,
        project: &Project,
        name: &str,
        description: &str,
    ) -> ServiceResult<Project> {
        validation::title("name", name, validation::PROJECT_NAME)?;
        validation::short_text(
            "description",
            description,
            validation::PROJECT_DESCRIPTION_MAX,
        )?;
        self.repo
            .update(project.id, name, description)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn edits_replace_name_and_description() {
        let store = MemoryStore::default();
        let project = ProjectRepository::create(&store, "alice", "Board", "old")
            .await
            .unwrap();
        let uc = UpdateProject { repo: &store };

        let updated = uc.execute(&project, "Roadmap", "").await.unwrap();
        assert_eq!(updated.name, "Roadmap");
        assert_eq!(updated.description, "");
    }

    #[tokio::test]
    async fn invalid_edits_leave_project_untouched() {
        let store = MemoryStore::default();
        let project = ProjectRepository::create(&store, "alice", "Board", "")
            .await
            .unwrap();
        let uc = UpdateProject { repo: &store };

        assert!(matches!(
            uc.execute(&project, "ab", "").await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            uc.execute(&project, "Roadmap", &"x".repeat(257)).await,
            Err(ServiceError::Validation(_))
        ));
        let stored = ProjectRepository::find(&store, project.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Board");

        ProjectRepository::soft_delete(&store, project.id)
            .await
            .unwrap();
        assert!(matches!(
            uc.execute(&project, "Roadmap", "").await,
            Err(ServiceError::NotFound)
        ));
    }
}
