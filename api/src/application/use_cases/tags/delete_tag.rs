use crate::application::access;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::tag_repository::TagRepository;

pub struct DeleteTag<'a, R: TagRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TagRepository + ?Sized> DeleteTag<'a, R> {
    pub async fn execute(&self, project_id: i64, tag_id: i64) -> ServiceResult<()> {
        let existing = access::scoped(self.repo.find(tag_id).await?, project_id)?;
        if self.repo.soft_delete(existing.id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}
