use crate::application::errors::ServiceResult;
use crate::application::ports::meeting_repository::{MeetingChanges, MeetingRepository, NewMeeting};
use crate::domain::meetings::Meeting;

pub struct CreateMeeting<'a, R: MeetingRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MeetingRepository + ?Sized> CreateMeeting<'a, R> {
    pub async fn execute(
        &self,
        project_id: i64,
        creator_id: &str,
        input: MeetingChanges,
    ) -> ServiceResult<Meeting> {
        super::validate(&input)?;
        let meeting = self
            .repo
            .create(&NewMeeting {
                project_id,
                name: input.name,
                description: input.description,
                start_date: input.start_date,
                end_date: input.end_date,
                creator_id: creator_id.to_string(),
            })
            .await?;
        Ok(meeting)
    }
}
