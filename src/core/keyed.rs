//! core::keyed
//!
//! Ordered collection with a key→position index, used for every
//! replace-or-append merge in the crate.
//!
//! # Invariants
//!
//! - Values never move once pushed; replacement happens in place
//! - Appended values keep first-appearance order
//! - A key maps to at most one position (the first one registered)
//!
//! # Example
//!
//! ```
//! use prop_registry::core::keyed::{KeyedList, Upsert};
//!
//! let mut list = KeyedList::new();
//! assert_eq!(list.upsert("bench", 1), Upsert::Inserted(0));
//! assert_eq!(list.upsert("lamp", 2), Upsert::Inserted(1));
//! assert_eq!(list.upsert("bench", 3), Upsert::Replaced(0));
//! assert_eq!(list.into_vec(), vec![3, 2]);
//! ```

use std::collections::HashMap;

/// Outcome of [`KeyedList::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// The key was new; the value was appended at this position.
    Inserted(usize),
    /// The key existed; the value at this position was replaced.
    Replaced(usize),
}

impl Upsert {
    pub fn is_insert(self) -> bool {
        matches!(self, Upsert::Inserted(_))
    }
}

/// Ordered values plus an index from key to position.
#[derive(Debug, Clone)]
pub struct KeyedList<V> {
    values: Vec<V>,
    index: HashMap<String, usize>,
}

impl<V> Default for KeyedList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> KeyedList<V> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Adopt an existing value under `key`.
    ///
    /// The value is always kept. The key is only registered if it is not
    /// already known, so a collection that already holds duplicates keeps
    /// pointing at the first occurrence.
    pub fn index_existing(&mut self, key: impl Into<String>, value: V) -> usize {
        let pos = self.values.len();
        self.values.push(value);
        self.index.entry(key.into()).or_insert(pos);
        pos
    }

    /// Append a value that has no key. It is kept but never matched.
    pub fn push_unkeyed(&mut self, value: V) -> usize {
        let pos = self.values.len();
        self.values.push(value);
        pos
    }

    /// Replace the value for `key` in place, or append it if the key is new.
    pub fn upsert(&mut self, key: impl Into<String>, value: V) -> Upsert {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            self.values[pos] = value;
            Upsert::Replaced(pos)
        } else {
            let pos = self.values.len();
            self.values.push(value);
            self.index.insert(key, pos);
            Upsert::Inserted(pos)
        }
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.position(key).map(|pos| &self.values[pos])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<V> {
        self.values
    }
}
