use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::action_repository::{ActionChanges, ActionRepository};
use crate::application::ports::priority_repository::PriorityRepository;
use crate::application::use_cases::priorities;
use crate::domain::actions::Action;

pub struct UpdateAction<'a, A, P>
where
    A: ActionRepository + ?Sized,
    P: PriorityRepository + ?Sized,
{
    pub actions: &'a A,
    pub priorities: &'a P,
}

impl<'a, A, P> UpdateAction<'a, A, P>
where
    A: ActionRepository + ?Sized,
    P: PriorityRepository + ?Sized,
{
    pub async fn execute(&self, action: &Action, input: ActionChanges) -> ServiceResult<Action> {
        super::validate(&input)?;
        priorities::ensure_in_project(self.priorities, action.project_id, input.priority_id)
            .await?;
        self.actions
            .update(action.id, &input)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
