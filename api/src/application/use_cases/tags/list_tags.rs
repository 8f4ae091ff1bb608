use crate::application::errors::ServiceResult;
use crate::application::ports::tag_repository::TagRepository;
use crate::domain::tags::Tag;

pub struct ListTags<'a, R: TagRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TagRepository + ?Sized> ListTags<'a, R> {
    pub async fn execute(&self, project_id: i64) -> ServiceResult<Vec<Tag>> {
        Ok(self.repo.list_for_project(project_id).await?)
    }
}
