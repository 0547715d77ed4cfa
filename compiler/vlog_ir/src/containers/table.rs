//! String-keyed association table.
//!
//! The table is a linear-scan association list layered over [`AstList`]:
//! every operation is O(n) in the number of entries, and iteration follows
//! insertion order. Tables in a parse session hold tens of entries (macros,
//! module names), which keeps the scan cheaper than hashing plus a second
//! ordering structure.

use super::AstList;
use thiserror::Error;

/// Failure codes for table operations. Success is `Ok`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum TableError {
    /// The operation could not be carried out (e.g. an empty key).
    #[error("table operation failed")]
    Fail,
    /// `insert` found the key already present; the stored value is unchanged.
    #[error("key already present in table")]
    KeyCollision,
    /// `get`, `update` or `delete` did not find the key.
    #[error("key not found in table")]
    KeyNotFound,
}

/// Result of a table operation.
pub type TableResult<T> = Result<T, TableError>;

/// One key/value pair.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TableEntry<V> {
    key: String,
    value: V,
}

impl<V> TableEntry<V> {
    /// The entry's key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The entry's value.
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Association table with unique string keys.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AstTable<V> {
    entries: AstList<TableEntry<V>>,
}

impl<V> AstTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: AstList::new(),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    /// Insert a new key.
    ///
    /// Reports [`TableError::KeyCollision`] instead of overwriting an
    /// existing entry, and [`TableError::Fail`] for an empty key.
    pub fn insert(&mut self, key: &str, value: V) -> TableResult<()> {
        if key.is_empty() {
            return Err(TableError::Fail);
        }
        if self.position(key).is_some() {
            return Err(TableError::KeyCollision);
        }
        self.entries.push(TableEntry {
            key: key.to_owned(),
            value,
        });
        Ok(())
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> TableResult<&V> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
            .ok_or(TableError::KeyNotFound)
    }

    /// Mutable value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> TableResult<&mut V> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
            .ok_or(TableError::KeyNotFound)
    }

    /// Replace the value of an existing key, returning the previous value.
    pub fn update(&mut self, key: &str, value: V) -> TableResult<V> {
        let slot = self.get_mut(key)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Remove an existing key, returning its value.
    pub fn delete(&mut self, key: &str) -> TableResult<V> {
        let index = self.position(key).ok_or(TableError::KeyNotFound)?;
        self.entries
            .remove(index)
            .map(|entry| entry.value)
            .ok_or(TableError::Fail)
    }

    /// Insert or overwrite, returning the previous value if there was one.
    ///
    /// An overwritten entry keeps its original position.
    pub fn upsert(&mut self, key: &str, value: V) -> TableResult<Option<V>> {
        if let Ok(slot) = self.get_mut(key) {
            return Ok(Some(std::mem::replace(slot, value)));
        }
        self.insert(key, value).map(|()| None)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(TableEntry::key)
    }

    /// Iterate the underlying entries in insertion order.
    pub fn entries(&self) -> &AstList<TableEntry<V>> {
        &self.entries
    }
}

impl<V> Default for AstTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
