use std::{
    borrow::Borrow,
    collections::{HashSet, hash_map::DefaultHasher},
    hash::{BuildHasher, BuildHasherDefault, Hash},
    iter, mem,
};

use crate::{entry::Entry, error::MapError, probe::ProbeSeq};

/// Capacity of the backing table for maps created with [`LinearProbingMap::new`] and
/// after [`LinearProbingMap::clear`].
pub const INITIAL_CAPACITY: usize = 13;

/// Load factor at which an insert first grows the table to `2 * capacity + 1`.
pub const MAX_LOAD_FACTOR: f64 = 0.67;

/// Hasher builder used when none is supplied. Deterministic across runs.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// Where an insert lands in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertTarget {
    /// A live entry with the same key sits at this index
    Existing(usize),
    /// The key is absent; this empty slot or tombstone receives it
    Vacant(usize),
    /// Neither the key nor a free slot exists on the probe sequence
    Full,
}

/// A hash map using open addressing with linear probing.
///
/// Collisions are resolved by walking forward one slot at a time from the key's home
/// slot. Removed entries are left behind as tombstones so that later lookups can keep
/// probing past them; tombstones are reused by inserts and dropped by resizes.
///
/// The table grows to `2 * capacity + 1` slots before an insert that would bring the
/// load factor to [`MAX_LOAD_FACTOR`] or above. It never shrinks on its own.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct LinearProbingMap<K, V, S = DefaultHashBuilder> {
    /// The slots of the backing table; its length is the capacity
    table: Vec<Option<Entry<K, V>>>,
    /// Number of live (present and not removed) entries
    size: usize,
    /// Builds the hasher used to find a key's home slot
    hash_builder: S,
}

impl<K, V> LinearProbingMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map with [`INITIAL_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty map with exactly `capacity` slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S: Default> Default for LinearProbingMap<K, V, S> {
    fn default() -> Self {
        Self::with_capacity_and_hasher(INITIAL_CAPACITY, S::default())
    }
}

/// Allocates a backing table of `capacity` empty slots.
fn empty_table<K, V>(capacity: usize) -> Vec<Option<Entry<K, V>>> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<K, V, S> LinearProbingMap<K, V, S> {
    /// Creates an empty map with [`INITIAL_CAPACITY`] slots using `hash_builder`.
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(INITIAL_CAPACITY, hash_builder)
    }

    /// Creates an empty map with exactly `capacity` slots using `hash_builder`.
    ///
    /// A capacity of zero is allowed; the first insert grows the table.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self { table: empty_table(capacity), size: 0, hash_builder }
    }

    /// Returns the number of live entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the backing table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Returns the current load factor of the map (live entries per slot).
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        if self.table.is_empty() {
            return 0.0;
        }
        self.size as f64 / self.table.len() as f64
    }

    /// Returns the number of tombstones currently occupying slots.
    #[must_use]
    pub fn tombstone_count(&self) -> usize {
        self.table.iter().flatten().filter(|entry| entry.is_removed()).count()
    }

    /// Returns the entry stored in slot `index`, tombstones included.
    ///
    /// Returns `None` for an empty slot or an index past the capacity.
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<&Entry<K, V>> {
        self.table.get(index).and_then(Option::as_ref)
    }

    /// Removes every entry and resets the backing table to [`INITIAL_CAPACITY`] slots.
    ///
    /// The old table is dropped as a whole rather than scrubbed slot by slot.
    pub fn clear(&mut self) {
        self.table = empty_table(INITIAL_CAPACITY);
        self.size = 0;
    }

    /// Returns an iterator over the live key-value pairs in slot order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: self.table.iter() }
    }

    /// Mutable access to a slot index produced by a probe sequence.
    #[allow(clippy::indexing_slicing)]
    fn slot_mut(&mut self, index: usize) -> &mut Option<Entry<K, V>> {
        // probe sequences only yield indices below the capacity
        &mut self.table[index]
    }

    /// True if inserting one more entry would reach the max load factor.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn insert_needs_growth(&self) -> bool {
        // an empty table divides to infinity and always grows
        (self.size.saturating_add(1) as f64) / (self.table.len() as f64) >= MAX_LOAD_FACTOR
    }
}

impl<K, V, S> LinearProbingMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Gets the home slot for a key
    #[allow(clippy::cast_possible_truncation)]
    fn home_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        let hash = self.hash_builder.hash_one(key);
        // the remainder is below the capacity, which is a usize
        hash.checked_rem(self.table.len() as u64).unwrap_or(0) as usize
    }

    /// Probe sequence for a key over the current table
    fn probe<Q: Hash + ?Sized>(&self, key: &Q) -> ProbeSeq {
        ProbeSeq::new(self.home_index(key), self.table.len())
    }

    /// Walks the probe sequence for `key` up to the first entry with an equal key.
    ///
    /// Returns the slot index of a live match together with the number of slots
    /// examined. A live entry always precedes any tombstone for the same key on its
    /// chain, so a dead match ends the search.
    fn locate<Q>(&self, key: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        for (probes, index) in self.probe(key).enumerate() {
            match self.table.get(index) {
                None | Some(None) => return None,
                Some(Some(entry)) if entry.key().borrow() == key => {
                    if entry.is_removed() {
                        return None;
                    }
                    return Some((index, probes.saturating_add(1)));
                }
                Some(Some(_)) => {}
            }
        }
        None
    }

    /// Index of the live entry for `key`
    fn find<Q>(&self, key: &Q) -> Result<usize, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.locate(key).map(|(index, _)| index).ok_or(MapError::NotFound)
    }

    /// Finds the slot an insert of `key` goes into.
    fn find_insert_target(&self, key: &K) -> InsertTarget {
        let mut first_tombstone = None;
        let mut live_passed: usize = 0;

        for index in self.probe(key) {
            match self.table.get(index) {
                None | Some(None) => {
                    return InsertTarget::Vacant(first_tombstone.unwrap_or(index));
                }
                Some(Some(entry)) if entry.is_removed() => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Some(Some(entry)) if entry.key() == key => return InsertTarget::Existing(index),
                Some(Some(_)) => {
                    live_passed = live_passed.saturating_add(1);
                    // every live entry has been passed, the key cannot appear further on
                    if let Some(tombstone) = first_tombstone.filter(|_| live_passed >= self.size) {
                        return InsertTarget::Vacant(tombstone);
                    }
                }
            }
        }

        first_tombstone.map_or(InsertTarget::Full, InsertTarget::Vacant)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the insert would bring the load factor to [`MAX_LOAD_FACTOR`] or above, the
    /// table first grows to `2 * capacity + 1` slots, whether or not the key is already
    /// present. A key that is already present has its entry replaced and the previous
    /// value returned; otherwise the pair takes the earliest tombstone on the key's
    /// probe sequence, or the first empty slot if there is none.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.insert_needs_growth() {
            self.grow();
        }

        match self.find_insert_target(&key) {
            InsertTarget::Existing(index) => {
                self.slot_mut(index).replace(Entry::new(key, value)).map(Entry::into_value)
            }
            InsertTarget::Vacant(index) => {
                *self.slot_mut(index) = Some(Entry::new(key, value));
                self.size = self.size.saturating_add(1);
                None
            }
            InsertTarget::Full => {
                self.grow();
                self.put(key, value)
            }
        }
    }

    /// Retrieves the value for a given key.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NotFound`] if the key has no live entry.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find(key)?;
        self.entry_at(index).map(Entry::value).ok_or(MapError::NotFound)
    }

    /// Gets a mutable reference to the value for a given key.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NotFound`] if the key has no live entry.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find(key)?;
        self.slot_mut(index).as_mut().map(Entry::value_mut).ok_or(MapError::NotFound)
    }

    /// Returns true if the map holds a live entry for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.locate(key).is_some()
    }

    /// Returns how many slots a lookup of `key` examines, counting the home slot as one.
    ///
    /// Returns `None` if the key has no live entry.
    #[must_use]
    pub fn probe_length<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.locate(key).map(|(_, probes)| probes)
    }

    /// Removes the entry for `key`, leaving a tombstone in its slot.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NotFound`] if the key has no live entry; the map is left
    /// unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let index = self.find(key)?;
        let entry = self.slot_mut(index).as_mut().ok_or(MapError::NotFound)?;
        entry.mark_removed();
        let value = entry.value().clone();

        self.size = self.size.saturating_sub(1);
        Ok(value)
    }

    /// Returns the keys of all live entries
    #[must_use]
    pub fn key_set(&self) -> HashSet<K>
    where
        K: Clone,
    {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Returns the values of all live entries in ascending slot order
    #[must_use]
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Rebuilds the backing table with `new_capacity` slots.
    ///
    /// Live entries are moved over in ascending slot order and tombstones are dropped.
    /// The load factor is not checked: a capacity that leaves the table above
    /// [`MAX_LOAD_FACTOR`] is honored as given.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] if `new_capacity` is smaller than the number
    /// of live entries.
    pub fn resize_backing_table(&mut self, new_capacity: usize) -> Result<(), MapError> {
        if new_capacity < self.size {
            return Err(MapError::InvalidArgument(format!(
                "capacity {new_capacity} is smaller than {} live entries",
                self.size
            )));
        }
        self.rehash(new_capacity);
        Ok(())
    }

    /// Grows the table to `2 * capacity + 1` slots
    fn grow(&mut self) {
        let new_capacity = self.table.len().saturating_mul(2).saturating_add(1);
        self.rehash(new_capacity);
    }

    /// Moves every live entry into a fresh table of `new_capacity` slots.
    ///
    /// Callers guarantee `new_capacity >= self.size`. Keys are unique already, so each
    /// entry goes to the first empty slot of its probe sequence without a key check.
    fn rehash(&mut self, new_capacity: usize) {
        let old_table = mem::replace(&mut self.table, empty_table(new_capacity));

        for entry in old_table.into_iter().flatten().filter(|entry| !entry.is_removed()) {
            let target = self
                .probe(entry.key())
                .find(|&index| matches!(self.table.get(index), Some(None)));
            if let Some(index) = target {
                *self.slot_mut(index) = Some(entry);
            }
        }
    }
}

impl<K, V, S> Extend<(K, V)> for LinearProbingMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for LinearProbingMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

/// Iterator over the live key-value pairs of the map, in slot order
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Remaining slots of the backing table
    slots: std::slice::Iter<'a, Option<Entry<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .flatten()
            .find(|entry| !entry.is_removed())
            .map(|entry| (entry.key(), entry.value()))
    }
}

impl<'a, K, V, S> IntoIterator for &'a LinearProbingMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
