use crate::application::errors::ServiceResult;
use crate::application::ports::action_repository::{ActionChanges, ActionRepository, NewAction};
use crate::application::ports::priority_repository::PriorityRepository;
use crate::application::use_cases::priorities;
use crate::domain::actions::Action;

pub struct CreateAction<'a, A, P>
where
    A: ActionRepository + ?Sized,
    P: PriorityRepository + ?Sized,
{
    pub actions: &'a A,
    pub priorities: &'a P,
}

impl<'a, A, P> CreateAction<'a, A, P>
where
    A: ActionRepository + ?Sized,
    P: PriorityRepository + ?Sized,
{
    pub async fn execute(
        &self,
        project_id: i64,
        creator_id: &str,
        input: ActionChanges,
    ) -> ServiceResult<Action> {
        super::validate(&input)?;
        priorities::ensure_in_project(self.priorities, project_id, input.priority_id).await?;
        let action = self
            .actions
            .create(&NewAction {
                project_id,
                title: input.title,
                description: input.description,
                due_date: input.due_date,
                priority_id: input.priority_id,
                creator_id: creator_id.to_string(),
            })
            .await?;
        Ok(action)
    }
}
