//! Product repository over a generic record store.
//!
//! The store keeps timestamps as RFC 3339 strings; the domain works with
//! `DateTime<Utc>`. This adapter is the only place that knows both shapes.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use catalog_core::{
    application::{
        ApplicationError,
        ports::{Clock, IdGenerator, ProductRepository},
    },
    domain::{CreateProductDto, Product, ProductId, UpdateProductDto},
    error::CatalogResult,
};

use crate::store::{Record, RecordStore};

/// Storage shape of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Partial product record; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRecordPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub updated_at: Option<String>,
}

impl Record for ProductRecord {
    type Patch = ProductRecordPatch;

    fn merge(&mut self, patch: ProductRecordPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }
}

impl ProductRecord {
    /// Parse the record back into a domain product.
    pub fn to_product(&self) -> CatalogResult<Product> {
        Ok(Product {
            id: ProductId::new(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            stock: self.stock,
            created_at: parse_timestamp(&self.id, &self.created_at)?,
            updated_at: parse_timestamp(&self.id, &self.updated_at)?,
        })
    }
}

/// Nanosecond precision keeps two writes in the same millisecond ordered.
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(id: &str, raw: &str) -> CatalogResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| {
            ApplicationError::CorruptRecord {
                id: id.to_owned(),
                reason: format!("bad timestamp '{raw}': {e}"),
            }
            .into()
        })
}

/// `ProductRepository` implementation over any `RecordStore<ProductRecord>`.
pub struct ProductRepositoryAdapter<S> {
    store: S,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl<S: RecordStore<ProductRecord>> ProductRepositoryAdapter<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, clock, ids }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: RecordStore<ProductRecord>> ProductRepository for ProductRepositoryAdapter<S> {
    fn find_all(&self) -> CatalogResult<Vec<Product>> {
        self.store
            .get_all()?
            .iter()
            .map(ProductRecord::to_product)
            .collect()
    }

    fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        self.store
            .get_by_id(id.as_str())?
            .map(|record| record.to_product())
            .transpose()
    }

    #[instrument(skip_all)]
    fn create(&self, input: CreateProductDto) -> CatalogResult<Product> {
        let id = self.ids.next_id();
        let now = format_timestamp(self.clock.now());

        let record = ProductRecord {
            id: id.to_string(),
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            created_at: now.clone(),
            updated_at: now,
        };

        let stored = self.store.insert(id.as_str(), record)?;
        debug!(id = %id, "Inserted product record");
        stored.to_product()
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    fn update(&self, id: &ProductId, patch: UpdateProductDto) -> CatalogResult<Option<Product>> {
        let record_patch = ProductRecordPatch {
            name: patch.name,
            description: patch.description,
            price: patch.price,
            stock: patch.stock,
            updated_at: Some(format_timestamp(self.clock.now())),
        };

        self.store
            .update(id.as_str(), record_patch)?
            .map(|record| record.to_product())
            .transpose()
    }

    fn delete(&self, id: &ProductId) -> CatalogResult<bool> {
        self.store.remove(id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::store::InMemoryStore;
    use crate::system::{ManualClock, SequentialIdGenerator, SystemClock, UuidGenerator};
    use catalog_core::error::CatalogError;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn repository() -> (
        ProductRepositoryAdapter<InMemoryStore<ProductRecord>>,
        ManualClock,
    ) {
        let clock = ManualClock::new(start());
        let repo = ProductRepositoryAdapter::new(
            InMemoryStore::new(),
            Arc::new(clock.clone()),
            Arc::new(SequentialIdGenerator::starting_at(1)),
        );
        (repo, clock)
    }

    fn mouse() -> CreateProductDto {
        CreateProductDto {
            name: "Mouse".into(),
            description: "Wireless".into(),
            price: 29.99,
            stock: 50,
        }
    }

    #[test]
    fn create_assigns_id_and_equal_timestamps() {
        let (repo, _) = repository();
        let product = repo.create(mouse()).unwrap();

        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.created_at, start());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn created_product_round_trips_through_store() {
        let (repo, _) = repository();
        let created = repo.create(mouse()).unwrap();

        let found = repo.find_by_id(&created.id).unwrap().unwrap();
        assert_eq!(found, created);

        let record = repo.store().get_by_id(created.id.as_str()).unwrap().unwrap();
        assert_eq!(record.created_at, "2024-06-01T12:00:00.000000000Z");
    }

    #[test]
    fn update_merges_and_refreshes_updated_at() {
        let (repo, _) = repository();
        let created = repo.create(mouse()).unwrap();

        let updated = repo
            .update(&created.id, UpdateProductDto::new().with_stock(5))
            .unwrap()
            .unwrap();

        assert_eq!(updated.stock, 5);
        assert_eq!(updated.name, "Mouse");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[test]
    fn update_unknown_is_none() {
        let (repo, _) = repository();
        let result = repo
            .update(&ProductId::new("nope"), UpdateProductDto::new())
            .unwrap();
        assert!(result.is_none());
        assert!(repo.store().is_empty().unwrap());
    }

    #[test]
    fn delete_then_find_is_none() {
        let (repo, _) = repository();
        let created = repo.create(mouse()).unwrap();

        assert!(repo.delete(&created.id).unwrap());
        assert!(repo.find_by_id(&created.id).unwrap().is_none());
        assert!(!repo.delete(&created.id).unwrap());
    }

    #[test]
    fn wall_clock_timestamps_are_monotonic_enough() {
        let repo = ProductRepositoryAdapter::new(
            InMemoryStore::new(),
            Arc::new(SystemClock),
            Arc::new(UuidGenerator),
        );
        let created = repo.create(mouse()).unwrap();
        let updated = repo
            .update(&created.id, UpdateProductDto::new())
            .unwrap()
            .unwrap();

        assert!(!created.id.as_str().is_empty());
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn corrupt_timestamp_is_reported() {
        let (repo, _) = repository();
        repo.store()
            .insert(
                "bad",
                ProductRecord {
                    id: "bad".into(),
                    name: "Broken".into(),
                    description: String::new(),
                    price: 1.0,
                    stock: 1,
                    created_at: "yesterday".into(),
                    updated_at: "yesterday".into(),
                },
            )
            .unwrap();

        let err = repo.find_by_id(&ProductId::new("bad")).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Application(ApplicationError::CorruptRecord { .. })
        ));
    }
}
