//! Create a product after checking price and stock.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::ProductRepository,
    domain::{CreateProductDto, DomainValidator as validator, Product},
    error::CatalogResult,
};

#[derive(Clone)]
pub struct CreateProduct {
    repository: Arc<dyn ProductRepository>,
}

impl CreateProduct {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Validate `input` and store it.
    ///
    /// A rule violation is returned before the repository is touched, so a
    /// rejected create never mutates the store.
    #[instrument(skip_all, fields(name = %input.name))]
    pub fn execute(&self, input: CreateProductDto) -> CatalogResult<Product> {
        if let Err(e) = validator::validate_new_product(&input) {
            warn!(error = %e, "Rejected new product");
            return Err(e.into());
        }

        let product = self.repository.create(input)?;
        info!(id = %product.id, "Product created");
        Ok(product)
    }
}
