//! Generic keyed collection backing the in-memory store
//!
//! A thin wrapper over `BTreeMap` so every collection shares one CRUD
//! surface and deterministic key-ordered iteration. Determinism matters:
//! snapshots and exports of equal databases are byte-identical.

use std::collections::BTreeMap;

/// An in-memory collection of records addressed by key
#[derive(Debug, Clone)]
pub struct KeyedCollection<K, V> {
    items: BTreeMap<K, V>,
}

impl<K: Ord, V> Default for KeyedCollection<K, V> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone, V: Clone> KeyedCollection<K, V> {
    /// Look up a record by key
    pub fn get(&self, key: &K) -> Option<&V> {
        self.items.get(key)
    }

    /// Insert or replace the record stored under `key`
    pub fn put(&mut self, key: K, value: V) {
        self.items.insert(key, value);
    }

    /// Remove the record under `key`, reporting whether one existed
    pub fn delete(&mut self, key: &K) -> bool {
        self.items.remove(key).is_some()
    }

    /// Whether a record exists under `key`
    pub fn contains(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    /// All records cloned out in ascending key order
    pub fn all(&self) -> Vec<V> {
        self.items.values().cloned().collect()
    }

    /// Iterate records in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.items.iter()
    }

    /// Number of records
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
