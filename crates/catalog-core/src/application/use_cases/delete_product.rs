//! Remove a product.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{application::ports::ProductRepository, domain::ProductId, error::CatalogResult};

#[derive(Clone)]
pub struct DeleteProduct {
    repository: Arc<dyn ProductRepository>,
}

impl DeleteProduct {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Returns `false` when there was nothing to delete.
    #[instrument(skip(self), fields(id = %id))]
    pub fn execute(&self, id: &ProductId) -> CatalogResult<bool> {
        let deleted = self.repository.delete(id)?;
        if deleted {
            info!("Product deleted");
        }
        Ok(deleted)
    }
}
