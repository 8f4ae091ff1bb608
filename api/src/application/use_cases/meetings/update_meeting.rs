use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::meeting_repository::{MeetingChanges, MeetingRepository};
use crate::domain::meetings::Meeting;

pub struct UpdateMeeting<'a, R: MeetingRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MeetingRepository + ?Sized> UpdateMeeting<'a, R> {
    pub async fn execute(&self, meeting: &Meeting, input: MeetingChanges) -> ServiceResult<Meeting> {
        super::validate(&input)?;
        self.repo
            .update(meeting.id, &input)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
