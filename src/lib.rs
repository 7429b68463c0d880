//! # Linear Probing Hash Map
//!
//! A Rust implementation of an open-addressing hash table with linear probing and lazy
//! deletion.
//!
//! - Collisions are resolved by stepping one slot forward from the key's home slot,
//!   wrapping around at the end of the table.
//! - Removal leaves a tombstone behind so that probe chains stay intact. Inserts reuse
//!   tombstones, and resizing drops them.
//! - Before an insert that would bring the load factor to [`MAX_LOAD_FACTOR`] or above,
//!   the table grows from `capacity` to `2 * capacity + 1` slots.
//!
//! ## Basic Usage
//!
//! ```rust
//! use linprobe::{LinearProbingMap, MapError};
//!
//! // Create a new hash map
//! let mut map = LinearProbingMap::new();
//!
//! // Insert values
//! map.put("apple".to_string(), 1);
//! map.put("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Ok(&1));
//!
//! // Update values
//! assert_eq!(map.put("apple".to_string(), 10), Some(1));
//! assert_eq!(map.get("apple"), Ok(&10));
//!
//! // Remove values
//! assert_eq!(map.remove("apple"), Ok(10));
//! assert_eq!(map.get("apple"), Err(MapError::NotFound));
//! assert!(!map.contains_key("apple"));
//! ```
//!
//! ## Bulk Views and Resizing
//!
//! ```rust
//! use linprobe::{LinearProbingMap, INITIAL_CAPACITY};
//!
//! let mut map: LinearProbingMap<u32, &str> =
//!     [(1, "one"), (2, "two"), (3, "three")].into_iter().collect();
//!
//! assert_eq!(map.key_set().len(), 3);
//! assert_eq!(map.values().len(), 3);
//!
//! // Any capacity that still fits the live entries is accepted
//! map.resize_backing_table(3).unwrap();
//! assert_eq!(map.capacity(), 3);
//! assert!(map.resize_backing_table(2).is_err());
//!
//! map.clear();
//! assert!(map.is_empty());
//! assert_eq!(map.capacity(), INITIAL_CAPACITY);
//! ```

/// Slot record holding a key, a value and a tombstone flag
mod entry;
/// Error type returned by map operations
mod error;
/// Linear probe sequence shared by every keyed operation
mod probe;
/// Module implementing the linear probing hash map
mod probing_table;

pub use entry::Entry;
pub use error::MapError;
pub use probing_table::{
    DefaultHashBuilder, INITIAL_CAPACITY, Iter, LinearProbingMap, MAX_LOAD_FACTOR,
};
