use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::notification_repository::NotificationRepository;

pub struct MarkNotificationsRead<'a, R: NotificationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: NotificationRepository + ?Sized> MarkNotificationsRead<'a, R> {
    pub async fn one(&self, user_id: &str, id: i64) -> ServiceResult<()> {
        if self.repo.mark_read(id, user_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }

    /// Returns how many notifications were unread.
    pub async fn all(&self, user_id: &str) -> ServiceResult<u64> {
        Ok(self.repo.mark_all_read(user_id).await?)
    }
}
