use chrono::Utc;

use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::action_repository::ActionRepository;
use crate::domain::actions::Action;

pub struct SetActionStatus<'a, R: ActionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ActionRepository + ?Sized> SetActionStatus<'a, R> {
    pub async fn execute(&self, action: &Action, closed: bool) -> ServiceResult<Action> {
        let closed_at = closed.then(|| action.closed_at.unwrap_or_else(Utc::now));
        self.repo
            .set_closed(action.id, closed_at)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
