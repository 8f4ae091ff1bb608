pub mod create_priority;
pub mod delete_priority;
pub mod list_priorities;
pub mod update_priority;

use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::priority_repository::{PriorityInput, PriorityRepository};
use crate::application::validation;
use crate::domain::ownership::ProjectOwned;

pub(crate) fn validate(input: &PriorityInput) -> ServiceResult<()> {
    validation::title("title", &input.title, validation::LABEL_TITLE)?;
    validation::color("color", &input.color)
}

/// Topics and actions may only reference priorities of their own project.
pub async fn ensure_in_project<R>(
    repo: &R,
    project_id: i64,
    priority_id: Option<i64>,
) -> ServiceResult<()>
where
    R: PriorityRepository + ?Sized,
{
    let Some(id) = priority_id else {
        return Ok(());
    };
    match repo.find(id).await? {
        Some(p) if p.belongs_to_project(project_id) => Ok(()),
        _ => Err(ServiceError::validation("unknown priority")),
    }
}
