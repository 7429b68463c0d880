use std::fmt;

/// A key-value record stored in a slot of the table.
///
/// Removal does not free the slot: the entry stays in place with its `removed` flag set
/// (a tombstone) so that probe chains running through it remain intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// The key of the pair
    key: K,
    /// The value associated with the key
    value: V,
    /// Tombstone flag, set once the entry has been removed
    removed: bool,
}

impl<K, V> Entry<K, V> {
    /// Creates a live entry.
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value, removed: false }
    }

    /// Returns the key of this entry.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of this entry.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns true if the entry has been removed and only marks a tombstone.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Turns the entry into a tombstone.
    pub(crate) fn mark_removed(&mut self) {
        self.removed = true;
    }

    /// Mutable access to the value
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the entry, returning its value.
    pub(crate) fn into_value(self) -> V {
        self.value
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_live() {
        let entry = Entry::new("key1".to_string(), 1);
        assert_eq!(entry.key(), "key1");
        assert_eq!(entry.value(), &1);
        assert!(!entry.is_removed());
    }

    #[test]
    fn test_mark_removed_keeps_pair() {
        let mut entry = Entry::new(7_u64, "seven");
        entry.mark_removed();

        assert!(entry.is_removed());
        assert_eq!(entry.key(), &7);
        assert_eq!(entry.value(), &"seven");
    }

    #[test]
    fn test_value_mut_and_into_value() {
        let mut entry = Entry::new('a', 10);
        *entry.value_mut() += 5;
        assert_eq!(entry.into_value(), 15);
    }

    #[test]
    fn test_display() {
        let entry = Entry::new("apple", 3);
        assert_eq!(entry.to_string(), "(apple, 3)");
    }
}
