pub mod actions;
pub mod comments;
pub mod meetings;
pub mod notifications;
pub mod ownership;
pub mod priorities;
pub mod projects;
pub mod tags;
pub mod topics;
pub mod users;
