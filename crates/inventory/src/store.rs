//! User-isolated key/value storage for inventory records.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use vanityshelf_core::UserId;

/// User-isolated key/value store abstraction.
///
/// Every read and write is scoped to one user; a key under one user is
/// invisible to every other user. The two cross-user methods exist solely for
/// referential maintenance when catalog records disappear.
pub trait UserStore<K, V>: Send + Sync {
    fn get(&self, user_id: UserId, key: &K) -> Option<V>;
    fn upsert(&self, user_id: UserId, key: K, value: V);
    fn remove(&self, user_id: UserId, key: &K) -> Option<V>;
    fn list(&self, user_id: UserId) -> Vec<V>;
    /// Drop all records for a user.
    fn clear_user(&self, user_id: UserId);
    /// Remove every record (across users) matching the predicate and return
    /// what was removed. Cascade-delete hook.
    fn remove_matching(&self, pred: &dyn Fn(&V) -> bool) -> Vec<(UserId, V)>;
    /// Apply an in-place edit to every record (across users). Used to null
    /// dangling references.
    fn for_each_mut(&self, apply: &dyn Fn(&mut V));
}

impl<K, V, S> UserStore<K, V> for Arc<S>
where
    S: UserStore<K, V> + ?Sized,
{
    fn get(&self, user_id: UserId, key: &K) -> Option<V> {
        (**self).get(user_id, key)
    }

    fn upsert(&self, user_id: UserId, key: K, value: V) {
        (**self).upsert(user_id, key, value)
    }

    fn remove(&self, user_id: UserId, key: &K) -> Option<V> {
        (**self).remove(user_id, key)
    }

    fn list(&self, user_id: UserId) -> Vec<V> {
        (**self).list(user_id)
    }

    fn clear_user(&self, user_id: UserId) {
        (**self).clear_user(user_id)
    }

    fn remove_matching(&self, pred: &dyn Fn(&V) -> bool) -> Vec<(UserId, V)> {
        (**self).remove_matching(pred)
    }

    fn for_each_mut(&self, apply: &dyn Fn(&mut V)) {
        (**self).for_each_mut(apply)
    }
}

/// In-memory user-isolated store for tests/dev.
#[derive(Debug)]
pub struct InMemoryUserStore<K, V> {
    inner: RwLock<HashMap<(UserId, K), V>>,
}

impl<K, V> InMemoryUserStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryUserStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> UserStore<K, V> for InMemoryUserStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, user_id: UserId, key: &K) -> Option<V> {
        let map = self.inner.read().ok()?;
        map.get(&(user_id, key.clone())).cloned()
    }

    fn upsert(&self, user_id: UserId, key: K, value: V) {
        if let Ok(mut map) = self.inner.write() {
            map.insert((user_id, key), value);
        }
    }

    fn remove(&self, user_id: UserId, key: &K) -> Option<V> {
        let mut map = self.inner.write().ok()?;
        map.remove(&(user_id, key.clone()))
    }

    fn list(&self, user_id: UserId) -> Vec<V> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.iter()
            .filter_map(|((u, _k), v)| if *u == user_id { Some(v.clone()) } else { None })
            .collect()
    }

    fn clear_user(&self, user_id: UserId) {
        if let Ok(mut map) = self.inner.write() {
            map.retain(|(u, _k), _v| *u != user_id);
        }
    }

    fn remove_matching(&self, pred: &dyn Fn(&V) -> bool) -> Vec<(UserId, V)> {
        let mut removed = Vec::new();
        if let Ok(mut map) = self.inner.write() {
            map.retain(|(u, _k), v| {
                if pred(v) {
                    removed.push((*u, v.clone()));
                    false
                } else {
                    true
                }
            });
        }
        removed
    }

    fn for_each_mut(&self, apply: &dyn Fn(&mut V)) {
        if let Ok(mut map) = self.inner.write() {
            for value in map.values_mut() {
                apply(value);
            }
        }
    }
}
