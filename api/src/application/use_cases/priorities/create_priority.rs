use crate::application::errors::ServiceResult;
use crate::application::ports::priority_repository::{PriorityInput, PriorityRepository};
use crate::domain::priorities::Priority;

pub struct CreatePriority<'a, R: PriorityRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PriorityRepository + ?Sized> CreatePriority<'a, R> {
    pub async fn execute(&self, project_id: i64, input: PriorityInput) -> ServiceResult<Priority> {
        super::validate(&input)?;
        Ok(self.repo.create(project_id, &input).await?)
    }
}
