//! Composition root.
//!
//! The only place where the layers are wired together:
//!
//! ```text
//! InMemoryStore -> ProductRepositoryAdapter -> ProductUseCases -> ProductController -> Router
//! ```
//!
//! Every [`Catalog`] owns its own store. There is no process-wide instance;
//! the binary builds one at startup and tests build one per case.

use std::sync::Arc;

use tracing::{debug, instrument};

use catalog_core::{
    application::{
        ProductUseCases,
        ports::{Clock, IdGenerator, ProductRepository},
    },
    error::CatalogResult,
};

use crate::{
    controller::{ProductController, Router},
    repository::{ProductRecord, ProductRepositoryAdapter},
    seed,
    store::{InMemoryStore, RecordStore},
    system::{SystemClock, UuidGenerator},
};

/// A fully wired product catalog.
#[derive(Clone)]
pub struct Catalog {
    store: InMemoryStore<ProductRecord>,
    use_cases: ProductUseCases,
    router: Router,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Catalog with the sample products, wall clock, and UUID ids.
    pub fn seeded() -> CatalogResult<Self> {
        Self::builder().build()
    }

    /// Catalog with no products.
    pub fn empty() -> CatalogResult<Self> {
        Self::builder().seed(false).build()
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn controller(&self) -> &ProductController {
        self.router.controller()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The use cases, for callers that skip the controller.
    pub fn use_cases(&self) -> &ProductUseCases {
        &self.use_cases
    }

    pub fn store(&self) -> &InMemoryStore<ProductRecord> {
        &self.store
    }
}

/// Overrides for [`Catalog`] wiring.
pub struct CatalogBuilder {
    seed: bool,
    store: Option<InMemoryStore<ProductRecord>>,
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Arc<dyn IdGenerator>>,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self {
            seed: true,
            store: None,
            clock: None,
            ids: None,
        }
    }
}

impl CatalogBuilder {
    /// Load the sample products (default: on).
    pub fn seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Use an existing store instead of a fresh one.
    pub fn store(mut self, store: InMemoryStore<ProductRecord>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Arc::new(ids));
        self
    }

    #[instrument(skip_all, fields(seed = self.seed))]
    pub fn build(self) -> CatalogResult<Catalog> {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let ids = self.ids.unwrap_or_else(|| Arc::new(UuidGenerator));
        let store = self.store.unwrap_or_default();

        // 1. External: the record store
        if self.seed {
            for record in seed::sample_products(clock.now()) {
                let id = record.id.clone();
                store.insert(&id, record)?;
            }
            let count = store.len()?;
            debug!(count, "Seeded product store");
        }

        // 2. Adapter: repository over the store
        let repository: Arc<dyn ProductRepository> = Arc::new(ProductRepositoryAdapter::new(
            store.clone(),
            clock,
            ids,
        ));

        // 3. Application: use cases
        let use_cases = ProductUseCases::new(repository);

        // 4. Adapter: controller and router
        let router = Router::new(ProductController::new(use_cases.clone()));

        Ok(Catalog {
            store,
            use_cases,
            router,
        })
    }
}
