//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// A storage backend for the DP cache.
///
/// Implementations pick the data structure that suits the index type.
pub trait Backend<I, K> {
    /// Returns the cached value for `index`, if computed.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the value for `index`, inserting `compute()` if absent.
    fn get_or_insert<F>(&mut self, index: I, compute: F) -> &K
    where
        F: FnOnce() -> K;

    /// Number of cached values.
    fn len(&self) -> usize;

    /// Whether nothing has been cached yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// Suitable for sparse indices or composite keys such as `(value, steps)`.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert<F>(&mut self, index: I, compute: F) -> &K
    where
        F: FnOnce() -> K,
    {
        self.data.entry(index).or_insert_with(compute)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
