use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::action_repository::ActionRepository;
use crate::domain::actions::Action;

pub struct DeleteAction<'a, R: ActionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ActionRepository + ?Sized> DeleteAction<'a, R> {
    pub async fn execute(&self, action: &Action) -> ServiceResult<()> {
        if self.repo.soft_delete(action.id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}
