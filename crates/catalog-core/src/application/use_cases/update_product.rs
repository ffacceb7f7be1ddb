//! Apply a partial update to an existing product.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::ProductRepository,
    domain::{DomainValidator as validator, Product, ProductId, UpdateProductDto},
    error::CatalogResult,
};

#[derive(Clone)]
pub struct UpdateProduct {
    repository: Arc<dyn ProductRepository>,
}

impl UpdateProduct {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Validate the present fields of `patch` and merge it.
    ///
    /// `Ok(None)` when the id is unknown.
    #[instrument(skip(self, patch), fields(id = %id))]
    pub fn execute(
        &self,
        id: &ProductId,
        patch: UpdateProductDto,
    ) -> CatalogResult<Option<Product>> {
        if let Err(e) = validator::validate_product_patch(&patch) {
            warn!(error = %e, "Rejected product update");
            return Err(e.into());
        }

        let updated = self.repository.update(id, patch)?;
        match &updated {
            Some(_) => info!("Product updated"),
            None => debug!("No product to update"),
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::output::MockProductRepository;
    use crate::application::use_cases::test_support::product;
    use crate::domain::DomainError;
    use crate::error::CatalogError;

    #[test]
    fn patch_is_forwarded() {
        let mut repo = MockProductRepository::new();
        repo.expect_update()
            .with(
                eq(ProductId::new("1")),
                eq(UpdateProductDto::new().with_stock(5)),
            )
            .times(1)
            .returning(|_, patch| Ok(Some(product("1", patch.stock.unwrap_or_default()))));

        let updated = UpdateProduct::new(Arc::new(repo))
            .execute(&ProductId::new("1"), UpdateProductDto::new().with_stock(5))
            .unwrap()
            .unwrap();
        assert_eq!(updated.stock, 5);
    }

    #[test]
    fn unknown_id_is_none() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let updated = UpdateProduct::new(Arc::new(repo))
            .execute(&ProductId::new("999"), UpdateProductDto::new())
            .unwrap();
        assert!(updated.is_none());
    }

    #[test]
    fn negative_fields_are_rejected_before_lookup() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().never();
        let use_case = UpdateProduct::new(Arc::new(repo));

        let err = use_case
            .execute(&ProductId::new("1"), UpdateProductDto::new().with_price(-0.5))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Domain(DomainError::NegativePrice { .. })
        ));

        let err = use_case
            .execute(&ProductId::new("1"), UpdateProductDto::new().with_stock(-1))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Domain(DomainError::NegativeStock { stock: -1 })
        ));
    }

    #[test]
    fn blank_name_is_rejected_before_lookup() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().never();

        let err = UpdateProduct::new(Arc::new(repo))
            .execute(&ProductId::new("1"), UpdateProductDto::new().with_name(""))
            .unwrap_err();
        assert_eq!(err, CatalogError::Domain(DomainError::BlankName));
    }
}
