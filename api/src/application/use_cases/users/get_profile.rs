use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::User;

pub struct GetProfile<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> GetProfile<'a, R> {
    pub async fn execute(&self, user_id: &str) -> ServiceResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
