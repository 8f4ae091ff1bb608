pub mod delete_notification;
pub mod list_notifications;
pub mod mark_read;
