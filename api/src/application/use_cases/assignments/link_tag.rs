use crate::application::access;
use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::assignment_repository::{AssignmentRepository, AssignmentTarget};
use crate::application::ports::tag_repository::TagRepository;

pub struct LinkTag<'a, T, A>
where
    T: TagRepository + ?Sized,
    A: AssignmentRepository + ?Sized,
{
    pub tags: &'a T,
    pub assignments: &'a A,
}

impl<'a, T, A> LinkTag<'a, T, A>
where
    T: TagRepository + ?Sized,
    A: AssignmentRepository + ?Sized,
{
    pub async fn link(
        &self,
        project_id: i64,
        target: AssignmentTarget,
        tag_id: i64,
    ) -> ServiceResult<()> {
        let tag = access::scoped(self.tags.find(tag_id).await?, project_id)?;
        self.assignments.link_tag(target, tag.id).await?;
        Ok(())
    }

    pub async fn unlink(&self, target: AssignmentTarget, tag_id: i64) -> ServiceResult<()> {
        if self.assignments.unlink_tag(target, tag_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn tag_must_belong_to_project() {
        let store = MemoryStore::default();
        let own = TagRepository::create(&store, 1, "infra", "#fff").await.unwrap();
        let foreign = TagRepository::create(&store, 2, "ops", "#000").await.unwrap();
        let target = AssignmentTarget::Action(42);
        let uc = LinkTag {
            tags: &store,
            assignments: &store,
        };
        assert!(matches!(
            uc.link(1, target, foreign.id).await,
            Err(ServiceError::NotFound)
        ));
        uc.link(1, target, own.id).await.unwrap();
        // linking twice is idempotent
        uc.link(1, target, own.id).await.unwrap();
        uc.unlink(target, own.id).await.unwrap();
        assert!(matches!(
            uc.unlink(target, own.id).await,
            Err(ServiceError::NotFound)
        ));
    }
}
