use crate::application::errors::ServiceResult;
use crate::application::ports::notification_repository::NotificationRepository;
use crate::domain::notifications::Notification;

pub struct ListNotifications<'a, R: NotificationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: NotificationRepository + ?Sized> ListNotifications<'a, R> {
    pub async fn execute(&self, user_id: &str, unread_only: bool) -> ServiceResult<Vec<Notification>> {
        Ok(self.repo.list_for_user(user_id, unread_only).await?)
    }
}
