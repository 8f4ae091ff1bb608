use crate::application::access;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::tag_repository::TagRepository;
use crate::domain::tags::Tag;

pub struct UpdateTag<'a, R: TagRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TagRepository + ?Sized> UpdateTag<'a, R> {
    pub async fn execute(
        &self,
        project_id: i64,
        tag_id: i64,
        title: &str,
        color: &str,
    ) -> ServiceResult<Tag> {
        super::validate(title, color)?;
        let existing = access::scoped(self.repo.find(tag_id).await?, project_id)?;
        self.repo
            .update(existing.id, title, color)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
