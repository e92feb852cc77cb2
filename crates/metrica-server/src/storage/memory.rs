use std::hash::Hash;

use dashmap::DashMap;

/// Minimal key/value capability shared by every storage backend.
///
/// Each call is individually synchronized. Nothing here spans a caller's
/// read-modify-write sequence.
pub trait KeyValueStore<K, V>: Send + Sync {
    /// Clone of the current value for `key`, if any.
    fn get(&self, key: &K) -> Option<V>;
    /// Unconditionally replace the value for `key`.
    fn put(&self, key: K, value: V);
}

/// In-memory store backed by `DashMap` (sharded reader/writer locks).
///
/// Readers of a shard run concurrently; a writer holds its shard exclusively
/// for the single insert only.
pub struct MemoryStore<K, V>
where
    K: Eq + Hash,
{
    data: DashMap<K, V>,
}

impl<K, V> MemoryStore<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K, V> Default for MemoryStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Preload entries.
impl<K, V> FromIterator<(K, V)> for MemoryStore<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<K, V> KeyValueStore<K, V> for MemoryStore<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Option<V> {
        self.data.get(key).map(|r| r.value().clone())
    }

    fn put(&self, key: K, value: V) {
        self.data.insert(key, value);
    }
}
