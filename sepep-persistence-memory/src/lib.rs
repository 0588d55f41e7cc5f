use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::{DashMap, mapref::entry::Entry};

pub mod fixtures;
pub mod results;
pub mod teams;

pub use fixtures::MemoryFixtureRepository;
pub use results::MemoryResultRepository;
pub use teams::MemoryTeamRepository;

/// Keyed records that list in first-insertion order.
struct SequencedStore<T> {
    items: DashMap<String, (u64, T)>,
    next_seq: AtomicU64,
}

impl<T: Clone> SequencedStore<T> {
    fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    fn list(&self) -> Vec<T> {
        let mut entries: Vec<(u64, T)> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, item)| item).collect()
    }

    fn get(&self, key: &str) -> Option<T> {
        self.items.get(key).map(|entry| entry.value().1.clone())
    }

    /// Replaces in place, keeping the original position. Returns `true` for a new key.
    fn upsert(&self, key: String, item: T) -> bool {
        match self.items.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().1 = item;
                false
            }
            Entry::Vacant(entry) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                entry.insert((seq, item));
                true
            }
        }
    }

    fn remove(&self, key: &str) -> bool {
        self.items.remove(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_keeps_insertion_order() {
        let store = SequencedStore::new();
        assert!(store.upsert("b".to_string(), 1));
        assert!(store.upsert("a".to_string(), 2));
        assert!(store.upsert("c".to_string(), 3));
        assert!(!store.upsert("b".to_string(), 10));
        assert_eq!(store.list(), vec![10, 2, 3]);

        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert!(store.upsert("a".to_string(), 4));
        assert_eq!(store.list(), vec![10, 3, 4]);
        assert_eq!(store.get("c"), Some(3));
        assert_eq!(store.get("z"), None);
    }
}
