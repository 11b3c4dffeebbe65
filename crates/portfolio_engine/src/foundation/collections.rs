//! Specialized collection types

pub use slotmap::{SlotMap, DefaultKey, Key};

/// Slot map that also remembers insertion order
///
/// Slot maps reuse freed slots, so plain iteration order drifts after
/// removals. Subscribers must be notified in registration order, which this
/// type keeps in a side list of keys.
pub struct OrderedSlotMap<K: Key, V> {
    slots: SlotMap<K, V>,
    order: Vec<K>,
}

impl<K: Key, V> OrderedSlotMap<K, V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Insert a value at the end of the order
    pub fn insert(&mut self, value: V) -> K {
        let key = self.slots.insert(value);
        self.order.push(key);
        key
    }

    /// Remove a value, returning it if the key was live
    pub fn remove(&mut self, key: K) -> Option<V> {
        let value = self.slots.remove(key)?;
        self.order.retain(|k| *k != key);
        Some(value)
    }

    /// Check whether a key is live
    pub fn contains_key(&self, key: K) -> bool {
        self.slots.contains_key(key)
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }

    /// Visit every value mutably in insertion order
    pub fn for_each_mut(&mut self, mut f: impl FnMut(K, &mut V)) {
        for key in &self.order {
            if let Some(value) = self.slots.get_mut(*key) {
                f(*key, value);
            }
        }
    }

    /// Iterate values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(move |key| self.slots.get(*key))
    }
}

impl<K: Key, V> Default for OrderedSlotMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_survives_slot_reuse() {
        let mut map: OrderedSlotMap<DefaultKey, &str> = OrderedSlotMap::new();
        let first = map.insert("first");
        map.insert("second");
        map.remove(first);
        // Reuses the freed slot but must still come last
        map.insert("third");

        let values: Vec<_> = map.values().copied().collect();
        assert_eq!(values, vec!["second", "third"]);
    }

    #[test]
    fn test_remove_stale_key() {
        let mut map: OrderedSlotMap<DefaultKey, u32> = OrderedSlotMap::new();
        let key = map.insert(1);
        assert_eq!(map.remove(key), Some(1));
        assert_eq!(map.remove(key), None);
        assert!(map.is_empty());
    }
}
