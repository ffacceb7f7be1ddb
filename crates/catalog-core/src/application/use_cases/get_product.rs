//! Fetch a single product by id.

use std::sync::Arc;

use tracing::instrument;

use crate::{
    application::ports::ProductRepository,
    domain::{Product, ProductId},
    error::CatalogResult,
};

#[derive(Clone)]
pub struct GetProduct {
    repository: Arc<dyn ProductRepository>,
}

impl GetProduct {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// `Ok(None)` when the id is unknown.
    #[instrument(skip(self), fields(id = %id))]
    pub fn execute(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        self.repository.find_by_id(id)
    }
}
