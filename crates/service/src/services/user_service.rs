use models::user::User;

use crate::stores::user_store::UserStore;

/// Pass-through orchestration over [`UserStore`].
///
/// Adds no logic of its own; it keeps the HTTP layer decoupled from the
/// storage backend so the store can be swapped without touching routes.
#[derive(Clone)]
pub struct UserService {
    store: UserStore,
}

impl UserService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    pub async fn get_user(&self, id: &str) -> Option<User> {
        self.store.get(id).await
    }

    pub async fn create_user(&self, user: User) -> User {
        self.store.create(user).await
    }

    pub async fn update_user(&self, id: &str, user: User) -> User {
        self.store.update(id, user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn service_forwards_to_store_unchanged() {
        let service = UserService::new(UserStore::empty());

        let created = service.create_user(User::new("5", "Eve", "eve@example.com")).await;
        assert_eq!(created, User::new("5", "Eve", "eve@example.com"));
        assert_eq!(service.get_user("5").await, Some(created));

        let updated = service.update_user("5", User::new("5", "Eve L", "eve@example.com")).await;
        assert_eq!(updated.name, "Eve L");
        assert_eq!(service.get_user("missing").await, None);
    }
}
