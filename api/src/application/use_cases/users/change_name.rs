use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::user_repository::{NameTaken, UserRepository};
use crate::application::validation;
use crate::domain::users::User;

pub struct ChangeName<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> ChangeName<'a, R> {
    pub async fn execute(&self, user_id: &str, name: &str) -> ServiceResult<User> {
        validation::user_name(name)?;
        if let Some(existing) = self.repo.find_by_name(name).await? {
            if existing.id != user_id {
                return Err(ServiceError::Conflict("name is already taken".into()));
            }
        }
        // a concurrent rename can still win between the lookup and the write
        match self.repo.set_name(user_id, name).await {
            Ok(user) => user.ok_or(ServiceError::NotFound),
            Err(e) if e.is::<NameTaken>() => {
                Err(ServiceError::Conflict("name is already taken".into()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
