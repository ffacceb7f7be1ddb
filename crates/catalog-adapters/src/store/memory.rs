//! In-memory record store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use catalog_core::{application::ApplicationError, error::CatalogResult};

use super::{Record, RecordStore};

/// Thread-safe in-memory record store.
///
/// Each operation takes the lock for its own duration only. `update` is a
/// read-modify-write under one write lock, so concurrent updates to the same
/// record never lose each other's fields. Nothing spans operations:
/// a caller doing get-then-insert gets no isolation.
///
/// Clones share the same map.
#[derive(Debug)]
pub struct InMemoryStore<R> {
    inner: Arc<RwLock<HashMap<String, R>>>,
}

impl<R: Record> InMemoryStore<R> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store holding `records`, keyed by the paired id.
    pub fn with_records(records: impl IntoIterator<Item = (String, R)>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(records.into_iter().collect())),
        }
    }

    /// Get the number of records.
    pub fn len(&self) -> CatalogResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.len())
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Remove every record.
    pub fn clear(&self) -> CatalogResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

#[cfg(test)]
impl<R: Record> InMemoryStore<R> {
    /// Poison the lock by panicking while holding it.
    pub(crate) fn poison(&self) {
        let inner = Arc::clone(&self.inner);
        let _ = std::thread::spawn(move || {
            let _guard = inner.write().unwrap();
            panic!("writer panicked");
        })
        .join();
    }
}

impl<R> Clone for InMemoryStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> for InMemoryStore<R> {
    fn get_all(&self) -> CatalogResult<Vec<R>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn get_by_id(&self, id: &str) -> CatalogResult<Option<R>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.get(id).cloned())
    }

    fn insert(&self, id: &str, record: R) -> CatalogResult<R> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(id.to_owned(), record.clone());
        Ok(record)
    }

    fn update(&self, id: &str, patch: R::Patch) -> CatalogResult<Option<R>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.get_mut(id).map(|existing| {
            existing.merge(patch);
            existing.clone()
        }))
    }

    fn remove(&self, id: &str) -> CatalogResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.remove(id).is_some())
    }
}
