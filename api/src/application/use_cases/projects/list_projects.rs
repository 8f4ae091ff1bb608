use std::collections::BTreeMap;

use crate::application::errors::ServiceResult;
use crate::application::ports::project_repository::ProjectRepository;
use crate::domain::projects::Project;

pub struct ListProjects<'a, R: ProjectRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProjectRepository + ?Sized> ListProjects<'a, R> {
    /// Owned and granted projects, deduplicated and ordered by ID.
    pub async fn execute(&self, user_id: &str) -> ServiceResult<Vec<Project>> {
        let mut projects: BTreeMap<i64, Project> = BTreeMap::new();
        for p in self.repo.list_owned(user_id).await? {
            projects.insert(p.id, p);
        }
        for p in self.repo.list_granted(user_id).await? {
            projects.entry(p.id).or_insert(p);
        }
        Ok(projects.into_values().collect())
    }
}
