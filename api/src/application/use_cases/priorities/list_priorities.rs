use crate::application::errors::ServiceResult;
use crate::application::ports::priority_repository::PriorityRepository;
use crate::domain::priorities::Priority;

pub struct ListPriorities<'a, R: PriorityRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PriorityRepository + ?Sized> ListPriorities<'a, R> {
    pub async fn execute(&self, project_id: i64) -> ServiceResult<Vec<Priority>> {
        Ok(self.repo.list_for_project(project_id).await?)
    }
}
