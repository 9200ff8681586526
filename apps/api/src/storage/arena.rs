use std::collections::BTreeMap;

/// An id-keyed collection with its own monotonic counter.
///
/// Ids start at 1 and are never handed out twice, even after removal.
/// Iteration follows id order, which is also insertion order.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    records: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Arena<T> {
    /// Allocates the next id, builds the record from it and stores it.
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.records.get_mut(&id)
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        self.records.remove(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.records.contains_key(&id)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut arena: Arena<(i64, &str)> = Arena::default();
        let a = arena.insert_with(|id| (id, "a"));
        let b = arena.insert_with(|id| (id, "b"));
        assert_eq!(a.0, 1);
        assert_eq!(b.0, 2);
        assert_eq!(arena.values().count(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut arena: Arena<i64> = Arena::default();
        arena.insert_with(|id| id);
        let second = arena.insert_with(|id| id);
        assert_eq!(arena.remove(second), Some(2));
        assert!(!arena.contains(2));
        assert_eq!(arena.insert_with(|id| id), 3);
    }

    #[test]
    fn test_values_follow_insertion_order() {
        let mut arena: Arena<String> = Arena::default();
        for name in ["x", "y", "z"] {
            arena.insert_with(|_| name.to_string());
        }
        let names: Vec<&str> = arena.values().map(String::as_str).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_missing_id_is_none() {
        let mut arena: Arena<i64> = Arena::default();
        assert!(arena.get(42).is_none());
        assert!(arena.get_mut(42).is_none());
        assert!(arena.remove(42).is_none());
    }
}
