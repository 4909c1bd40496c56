//! Generic lock-guarded entity table.
//!
//! An [`EntityCache`] owns its records by value behind a single reader/writer
//! lock. Every read hands out a clone, so no caller ever holds a reference into
//! the table, and every write is a single critical section, so readers never
//! see a record halfway through an update.

use parking_lot::RwLock;
use std::collections::HashMap;
use steam_social_proto::SteamId;

/// A record stored in an [`EntityCache`], keyed by its own id.
pub trait Entity: Clone {
    /// Key under which this record is stored.
    fn id(&self) -> SteamId;
}

/// Concurrent map from [`SteamId`] to an owned record.
#[derive(Debug)]
pub struct EntityCache<T> {
    entries: RwLock<HashMap<SteamId, T>>,
}

impl<T: Entity> Default for EntityCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Insert `entity` unless its id is already present.
    ///
    /// Returns `true` if the entity was inserted. An existing entry is left
    /// untouched, including any fields set by earlier partial updates.
    pub fn add(&self, entity: T) -> bool {
        let mut entries = self.entries.write();
        let id = entity.id();
        if entries.contains_key(&id) {
            return false;
        }
        entries.insert(id, entity);
        true
    }

    /// Remove the entry for `id`. Returns `true` if one existed.
    pub fn remove(&self, id: SteamId) -> bool {
        self.entries.write().remove(&id).is_some()
    }

    /// Clone of the entry for `id`, or `None` if absent.
    pub fn by_id(&self, id: SteamId) -> Option<T> {
        self.entries.read().get(&id).cloned()
    }

    /// Whether an entry for `id` exists.
    pub fn contains(&self, id: SteamId) -> bool {
        self.entries.read().contains_key(&id)
    }

    /// Point-in-time copy of the whole table.
    pub fn get_copy(&self) -> HashMap<SteamId, T> {
        self.entries.read().clone()
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.read().len()
    }

    /// Apply `f` to the entry for `id` under the write lock.
    ///
    /// Absent ids are a silent no-op; returns whether `f` ran.
    pub(crate) fn update<F>(&self, id: SteamId, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.entries.write().get_mut(&id) {
            Some(entry) => {
                f(entry);
                true
            }
            None => false,
        }
    }

    /// Apply `f` to the entry for `id`, first inserting `make(id)` if absent.
    pub(crate) fn upsert_with<M, F>(&self, id: SteamId, make: M, f: F)
    where
        M: FnOnce(SteamId) -> T,
        F: FnOnce(&mut T),
    {
        let mut entries = self.entries.write();
        let entry = entries.entry(id).or_insert_with(|| make(id));
        f(entry);
    }

    /// Store `entity`, replacing any existing entry with the same id.
    pub(crate) fn replace(&self, entity: T) {
        self.entries.write().insert(entity.id(), entity);
    }
}

/// Generates a setter that updates one field of an existing entry.
///
/// The generated method is a no-op when the id is unknown: field updates may
/// arrive before the message that establishes the entity.
macro_rules! field_setter {
    ($(#[$meta:meta])* $name:ident, $field:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $name(&self, id: steam_social_proto::SteamId, value: $ty) {
            self.update(id, |entry| entry.$field = value);
        }
    };
}

pub(crate) use field_setter;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        id: SteamId,
        label: &'static str,
    }

    impl Entity for Item {
        fn id(&self) -> SteamId {
            self.id
        }
    }

    fn item(raw: u64, label: &'static str) -> Item {
        Item {
            id: SteamId::new(raw),
            label,
        }
    }

    #[test]
    fn test_add_is_insert_if_absent() {
        let cache = EntityCache::new();
        assert!(cache.add(item(1, "first")));
        assert!(!cache.add(item(1, "second")));
        assert_eq!(cache.by_id(SteamId::new(1)).unwrap().label, "first");
        assert_eq!(cache.count(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let cache: EntityCache<Item> = EntityCache::new();
        assert!(!cache.remove(SteamId::new(9)));
        assert_eq!(cache.count(), 0);
    }

    #[test]
    fn test_update_absent_creates_nothing() {
        let cache: EntityCache<Item> = EntityCache::new();
        assert!(!cache.update(SteamId::new(3), |i| i.label = "x"));
        assert!(!cache.contains(SteamId::new(3)));
    }

    #[test]
    fn test_copies_are_independent() {
        let cache = EntityCache::new();
        cache.add(item(1, "a"));
        let mut copy = cache.get_copy();
        copy.get_mut(&SteamId::new(1)).unwrap().label = "changed";
        copy.insert(SteamId::new(2), item(2, "b"));

        assert_eq!(cache.by_id(SteamId::new(1)).unwrap().label, "a");
        assert_eq!(cache.count(), 1);
    }

    #[test]
    fn test_last_update_wins() {
        let cache = EntityCache::new();
        cache.add(item(1, "a"));
        cache.update(SteamId::new(1), |i| i.label = "u1");
        cache.update(SteamId::new(1), |i| i.label = "u2");
        assert_eq!(cache.by_id(SteamId::new(1)).unwrap().label, "u2");
    }

    #[test]
    fn test_upsert_creates_then_mutates() {
        let cache = EntityCache::new();
        cache.upsert_with(SteamId::new(4), |id| Item { id, label: "new" }, |i| i.label = "set");
        assert_eq!(cache.by_id(SteamId::new(4)).unwrap().label, "set");
        cache.upsert_with(SteamId::new(4), |id| Item { id, label: "new" }, |_| {});
        assert_eq!(cache.by_id(SteamId::new(4)).unwrap().label, "set");
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        use std::sync::Arc;
        use std::thread;

        let cache = Arc::new(EntityCache::new());
        let writers: Vec<_> = (0..4u64)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..250u64 {
                        cache.add(item(t * 1000 + i, "w"));
                    }
                })
            })
            .collect();
        let reader = {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for _ in 0..100 {
                    let copy = cache.get_copy();
                    assert!(copy.iter().all(|(k, v)| *k == v.id));
                }
            })
        };
        for w in writers {
            w.join().unwrap();
        }
        reader.join().unwrap();
        assert_eq!(cache.count(), 1000);
    }
}
