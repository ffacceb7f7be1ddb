//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `catalog-adapters` crate provides implementations.

use chrono::{DateTime, Utc};

use crate::domain::{CreateProductDto, Product, ProductId, UpdateProductDto};
use crate::error::CatalogResult;

/// Port for product persistence.
///
/// Implemented by:
/// - `catalog_adapters::repository::ProductRepositoryAdapter` (over any record store)
///
/// ## Design Notes
///
/// - Absence is `Ok(None)` / `Ok(false)`, never an error
/// - `Err` is reserved for storage failures
/// - The repository assigns ids and timestamps; callers never do
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// All stored products, in no particular order.
    fn find_all(&self) -> CatalogResult<Vec<Product>>;

    /// Look up a single product.
    fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>>;

    /// Store a new product and return it with its assigned id and timestamps.
    fn create(&self, input: CreateProductDto) -> CatalogResult<Product>;

    /// Merge `patch` into an existing product, refreshing `updated_at`.
    fn update(&self, id: &ProductId, patch: UpdateProductDto) -> CatalogResult<Option<Product>>;

    /// Remove a product. Returns whether it existed.
    fn delete(&self, id: &ProductId) -> CatalogResult<bool>;
}

/// Port for the current time.
///
/// Implemented by:
/// - `catalog_adapters::system::SystemClock` (wall clock)
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Port for product id generation.
///
/// Implemented by:
/// - `catalog_adapters::system::UuidGenerator` (random v4 UUIDs)
/// - `catalog_adapters::system::SequentialIdGenerator` (tests, demos)
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ProductId;
}
