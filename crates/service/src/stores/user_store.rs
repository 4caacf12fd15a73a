use models::user::User;

use crate::storage::memory_map_store::MemoryMapStore;

/// In-memory user store keyed by the caller-assigned user id.
///
/// Records live for the process lifetime; there is no deletion and no
/// expiry. Writes overwrite whole records, last write wins.
#[derive(Clone)]
pub struct UserStore {
    users: MemoryMapStore<String, User>,
}

impl UserStore {
    /// Create a store seeded with the fixture users.
    pub fn new() -> Self {
        let seed = [
            User::new("1", "Alice", "alice@example.com"),
            User::new("2", "Bob", "bob@example.com"),
        ];
        Self { users: MemoryMapStore::from_entries(seed.into_iter().map(|u| (u.id.clone(), u))) }
    }

    /// Create an empty, unseeded store.
    pub fn empty() -> Self {
        Self { users: MemoryMapStore::new() }
    }

    pub async fn get(&self, id: &str) -> Option<User> {
        self.users.get(&id.to_string()).await
    }

    /// Store `user` under its own identifier, overwriting any existing
    /// entry; returns the stored record.
    pub async fn create(&self, user: User) -> User {
        self.users.insert(user.id.clone(), user).await
    }

    /// Replace the entry at `id` with `user`, forcing the record's
    /// identifier to the key. Inserts when the key is absent.
    pub async fn update(&self, id: &str, mut user: User) -> User {
        user.id = id.to_string();
        self.users.insert(user.id.clone(), user).await
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
