//! List every product in the catalog.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{application::ports::ProductRepository, domain::Product, error::CatalogResult};

#[derive(Clone)]
pub struct ListProducts {
    repository: Arc<dyn ProductRepository>,
}

impl ListProducts {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Order is whatever the repository yields; callers must not rely on it.
    #[instrument(skip_all)]
    pub fn execute(&self) -> CatalogResult<Vec<Product>> {
        let products = self.repository.find_all()?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }
}
