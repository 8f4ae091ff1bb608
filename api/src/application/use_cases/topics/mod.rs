pub mod create_topic;
pub mod delete_topic;
pub mod get_topic;
pub mod list_topics;
pub mod set_topic_solution;
pub mod set_topic_status;
pub mod update_topic;

use crate::application::errors::ServiceResult;
use crate::application::ports::topic_repository::TopicChanges;
use crate::application::validation;

pub(crate) fn validate(input: &TopicChanges) -> ServiceResult<()> {
    validation::title("title", &input.title, validation::ITEM_TITLE)?;
    validation::long_text("description", &input.description, validation::LONG_TEXT_MAX)
}
