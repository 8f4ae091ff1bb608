use crate::application::access;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::priority_repository::{PriorityInput, PriorityRepository};
use crate::domain::priorities::Priority;

pub struct UpdatePriority<'a, R: PriorityRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PriorityRepository + ?Sized> UpdatePriority<'a, R> {
    pub async fn execute(
        &self,
        project_id: i64,
        priority_id: i64,
        input: PriorityInput,
    ) -> ServiceResult<Priority> {
        super::validate(&input)?;
        let existing = access::scoped(self.repo.find(priority_id).await?, project_id)?;
        self.repo
            .update(existing.id, &input)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
