pub mod create_action;
pub mod delete_action;
pub mod get_action;
pub mod link_topic;
pub mod list_actions;
pub mod set_action_status;
pub mod update_action;

use crate::application::errors::ServiceResult;
use crate::application::ports::action_repository::ActionChanges;
use crate::application::validation;

pub(crate) fn validate(input: &ActionChanges) -> ServiceResult<()> {
    validation::title("title", &input.title, validation::ITEM_TITLE)?;
    validation::long_text("description", &input.description, validation::LONG_TEXT_MAX)
}
