use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::notification_repository::NotificationRepository;

pub struct DeleteNotification<'a, R: NotificationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: NotificationRepository + ?Sized> DeleteNotification<'a, R> {
    pub async fn execute(&self, user_id: &str, id: i64) -> ServiceResult<()> {
        if self.repo.delete(id, user_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}
