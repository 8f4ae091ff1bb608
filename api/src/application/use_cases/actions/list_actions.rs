use crate::application::errors::ServiceResult;
use crate::application::ports::action_repository::ActionRepository;
use crate::domain::actions::{Action, ActionStateFilter};

pub struct ListActions<'a, R: ActionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ActionRepository + ?Sized> ListActions<'a, R> {
    pub async fn execute(
        &self,
        project_id: i64,
        state: ActionStateFilter,
    ) -> ServiceResult<Vec<Action>> {
        Ok(self.repo.list_for_project(project_id, state).await?)
    }
}
