use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::Saloon;

/// Ordered key-value persistence for Saloon aggregates
///
/// Every read returns an owned copy; callers mutate the copy and write it
/// back with `insert`. A successful `insert` is visible to the next `get` or
/// `values` call on the same store.
pub trait RecordStore {
    /// Look up a saloon by id
    ///
    /// # Errors
    ///
    /// Only backends that can fail (I/O, decoding) return an error; a missing
    /// key is `Ok(None)`.
    fn get(&self, id: &str) -> Result<Option<Saloon>>;

    /// Store `saloon` under `id`, replacing any existing value
    ///
    /// # Errors
    ///
    /// Returns `Persistence` or `Serialization` when the backend cannot write.
    fn insert(&mut self, id: &str, saloon: Saloon) -> Result<()>;

    /// Remove and return the value stored under `id`
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the backend cannot delete.
    fn remove(&mut self, id: &str) -> Result<Option<Saloon>>;

    /// All stored saloons, in a deterministic order
    ///
    /// # Errors
    ///
    /// Returns `Persistence` or `Serialization` when the backend cannot read.
    fn values(&self) -> Result<Vec<Saloon>>;
}

/// In-memory store for Saloons
///
/// A BTreeMap keyed by saloon id, so `values()` is in key order.
/// Not thread-safe (no Arc/RwLock) - designed for single-threaded use.
#[derive(Debug, Clone, Default)]
pub struct Store {
    saloons: BTreeMap<String, Saloon>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            saloons: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.saloons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saloons.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.saloons.contains_key(id)
    }

    /// Borrow a stored saloon without copying it
    pub fn peek(&self, id: &str) -> Option<&Saloon> {
        self.saloons.get(id)
    }
}

impl RecordStore for Store {
    fn get(&self, id: &str) -> Result<Option<Saloon>> {
        Ok(self.saloons.get(id).cloned())
    }

    fn insert(&mut self, id: &str, saloon: Saloon) -> Result<()> {
        self.saloons.insert(id.to_string(), saloon);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<Option<Saloon>> {
        Ok(self.saloons.remove(id))
    }

    fn values(&self) -> Result<Vec<Saloon>> {
        Ok(self.saloons.values().cloned().collect())
    }
}
