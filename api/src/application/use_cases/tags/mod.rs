pub mod create_tag;
pub mod delete_tag;
pub mod list_tags;
pub mod update_tag;

use crate::application::errors::ServiceResult;
use crate::application::validation;

pub(crate) fn validate(title: &str, color: &str) -> ServiceResult<()> {
    validation::title("title", title, validation::LABEL_TITLE)?;
    validation::color("color", color)
}
