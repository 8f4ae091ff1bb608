use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::user_repository::UserRepository;

pub struct ResolveUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> ResolveUser<'a, R> {
    /// Returns the display name of a user. Users that never picked a name are not resolvable.
    pub async fn execute(&self, user_id: &str) -> ServiceResult<String> {
        self.repo
            .find_by_id(user_id)
            .await?
            .and_then(|u| u.name)
            .ok_or(ServiceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn only_named_users_resolve() {
        let store = MemoryStore::default();
        let uc = ResolveUser { repo: &store };
        assert!(matches!(
            uc.execute("ghost").await,
            Err(ServiceError::NotFound)
        ));

        store.ensure_user("bob").await.unwrap();
        assert!(matches!(uc.execute("bob").await, Err(ServiceError::NotFound)));

        store.set_name("bob", "bob.b").await.unwrap();
        assert_eq!(uc.execute("bob").await.unwrap(), "bob.b");
    }
}
