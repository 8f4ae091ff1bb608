use crate::application::errors::ServiceResult;
use crate::application::ports::tag_repository::TagRepository;
use crate::domain::tags::Tag;

pub struct CreateTag<'a, R: TagRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TagRepository + ?Sized> CreateTag<'a, R> {
    pub async fn execute(&self, project_id: i64, title: &str, color: &str) -> ServiceResult<Tag> {
        super::validate(title, color)?;
        Ok(self.repo.create(project_id, title, color).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::ServiceError;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn bad_color_is_rejected() {
        let store = MemoryStore::default();
        let uc = CreateTag { repo: &store };
        assert!(matches!(
            uc.execute(1, "infra", "blue").await,
            Err(ServiceError::Validation(_))
        ));
        let tag = uc.execute(1, "infra", "#00f").await.unwrap();
        assert_eq!(tag.project_id, 1);
    }
}
