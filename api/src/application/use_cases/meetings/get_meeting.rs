use crate::application::access;
use crate::application::errors::ServiceResult;
use crate::application::ports::meeting_repository::MeetingRepository;
use crate::domain::meetings::Meeting;

pub struct GetMeeting<'a, R: MeetingRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MeetingRepository + ?Sized> GetMeeting<'a, R> {
    pub async fn execute(&self, project_id: i64, meeting_id: i64) -> ServiceResult<Meeting> {
        let meeting = self.repo.find(meeting_id).await?;
        access::scoped(meeting, project_id)
    }
}
