//! Record store adapters.
//!
//! The store is the outermost layer: a generic keyed collection that knows
//! nothing about products. Repository adapters translate between domain
//! entities and the record shape a store holds.

mod memory;

pub use memory::InMemoryStore;

use catalog_core::error::CatalogResult;

/// A value a store can hold.
///
/// `Patch` is the typed partial form of the record: each field the caller
/// may change, wrapped in `Option`. `merge` applies the present fields over
/// `self` and leaves the others alone.
pub trait Record: Clone + Send + Sync + 'static {
    type Patch: Send;

    fn merge(&mut self, patch: Self::Patch);
}

/// Generic CRUD over records keyed by string id.
///
/// Implemented by:
/// - `InMemoryStore` (process-local, lost on exit)
pub trait RecordStore<R: Record>: Send + Sync {
    /// Snapshot of every record. Order is unspecified.
    fn get_all(&self) -> CatalogResult<Vec<R>>;

    fn get_by_id(&self, id: &str) -> CatalogResult<Option<R>>;

    /// Insert, overwriting any record already stored under `id`.
    fn insert(&self, id: &str, record: R) -> CatalogResult<R>;

    /// Merge `patch` into the record under `id`; `None` when absent.
    fn update(&self, id: &str, patch: R::Patch) -> CatalogResult<Option<R>>;

    /// Returns whether a record was removed.
    fn remove(&self, id: &str) -> CatalogResult<bool>;
}
