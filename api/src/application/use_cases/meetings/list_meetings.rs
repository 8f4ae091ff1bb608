use crate::application::errors::ServiceResult;
use crate::application::ports::meeting_repository::MeetingRepository;
use crate::domain::meetings::Meeting;

pub struct ListMeetings<'a, R: MeetingRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MeetingRepository + ?Sized> ListMeetings<'a, R> {
    pub async fn execute(&self, project_id: i64) -> ServiceResult<Vec<Meeting>> {
        Ok(self.repo.list_for_project(project_id).await?)
    }
}
