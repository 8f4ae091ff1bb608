use crate::application::access;
use crate::application::errors::ServiceResult;
use crate::application::ports::action_repository::ActionRepository;
use crate::domain::actions::Action;

pub struct GetAction<'a, R: ActionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ActionRepository + ?Sized> GetAction<'a, R> {
    pub async fn execute(&self, project_id: i64, action_id: i64) -> ServiceResult<Action> {
        access::scoped(self.repo.find(action_id).await?, project_id)
    }
}
