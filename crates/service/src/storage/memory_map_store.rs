use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

/// Generic in-memory key-value map store.
///
/// Wraps a `HashMap<K, V>` behind an async `RwLock` and provides simple
/// CRUD helpers. Handles are cheap to clone and safe to share across
/// concurrently running request handlers; each operation is atomic per key.
#[derive(Clone)]
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty store.
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Create a store pre-populated from `(key, value)` pairs.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self { inner: Arc::new(RwLock::new(entries.into_iter().collect())) }
    }

    /// List all entries as `(key, value)` pairs.
    pub async fn list(&self) -> Vec<(K, V)> {
        let map = self.inner.read().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or replace a value by key; returns the stored value.
    /// Last write wins on key collision.
    pub async fn insert(&self, key: K, value: V) -> V {
        let mut map = self.inner.write().await;
        map.insert(key, value.clone());
        value
    }

    /// Number of entries.
    pub async fn len(&self) -> usize {
        let map = self.inner.read().await;
        map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<K, V> Default for MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_map_store_crud() {
        let store = MemoryMapStore::<String, String>::new();

        // initially empty
        assert!(store.is_empty().await);
        assert_eq!(store.get(&"a".to_string()).await, None);

        // insert and check
        store.insert("a".into(), "1".into()).await;
        store.insert("b".into(), "2".into()).await;
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(&"a".to_string()).await.as_deref(), Some("1"));

        // overwrite keeps the last write
        let stored = store.insert("a".into(), "10".into()).await;
        assert_eq!(stored, "10");
        assert_eq!(store.get(&"a".to_string()).await.as_deref(), Some("10"));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn clones_share_the_same_map() {
        let store = MemoryMapStore::<String, u32>::new();
        let other = store.clone();
        store.insert("k".into(), 7).await;
        assert_eq!(other.get(&"k".to_string()).await, Some(7));
    }

    #[tokio::test]
    async fn from_entries_seeds_the_map() {
        let store =
            MemoryMapStore::from_entries([("x".to_string(), 1u32), ("y".to_string(), 2u32)]);
        let mut entries = store.list().await;
        entries.sort();
        assert_eq!(entries, vec![("x".to_string(), 1), ("y".to_string(), 2)]);
    }
}
