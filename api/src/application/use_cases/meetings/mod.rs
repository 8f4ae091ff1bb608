pub mod create_meeting;
pub mod delete_meeting;
pub mod get_meeting;
pub mod list_meetings;
pub mod update_meeting;

use crate::application::errors::ServiceResult;
use crate::application::ports::meeting_repository::MeetingChanges;
use crate::application::validation;

pub(crate) fn validate(input: &MeetingChanges) -> ServiceResult<()> {
    validation::title("name", &input.name, validation::MEETING_NAME)?;
    validation::long_text("description", &input.description, validation::LONG_TEXT_MAX)?;
    validation::date_range(input.start_date, input.end_date)
}
