//! Product controller.
//!
//! Responsibilities:
//! 1. Check the shape of incoming data (required fields present)
//! 2. Call the matching use case
//! 3. Map the outcome to a status code and response envelope
//!
//! Business rules stay in the use cases. Every error is caught here; nothing
//! escapes to the transport.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use catalog_core::{
    application::ProductUseCases,
    domain::{CreateProductDto, DomainError, Product, ProductId, UpdateProductDto},
    error::{CatalogError, ErrorCategory},
};

use super::ControllerResponse;

const NOT_FOUND: &str = "Product not found";
const DELETED: &str = "Product deleted successfully";

/// Raw create/update payload as a transport received it.
///
/// Every field is optional here; `create` decides which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl ProductInput {
    /// Require name, price and stock; description defaults to empty.
    ///
    /// A blank name counts as missing.
    pub fn into_create(self) -> Result<CreateProductDto, DomainError> {
        let name = self.name.filter(|n| !n.trim().is_empty());

        match (name, self.price, self.stock) {
            (Some(name), Some(price), Some(stock)) => Ok(CreateProductDto {
                name,
                description: self.description.unwrap_or_default(),
                price,
                stock,
            }),
            (name, price, stock) => {
                let mut fields = Vec::new();
                if name.is_none() {
                    fields.push("name");
                }
                if price.is_none() {
                    fields.push("price");
                }
                if stock.is_none() {
                    fields.push("stock");
                }
                Err(DomainError::MissingRequiredFields { fields })
            }
        }
    }
}

impl From<ProductInput> for UpdateProductDto {
    fn from(input: ProductInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
        }
    }
}

/// Translates transport-level requests into use-case calls and back.
#[derive(Clone)]
pub struct ProductController {
    use_cases: ProductUseCases,
}

impl ProductController {
    pub fn new(use_cases: ProductUseCases) -> Self {
        Self { use_cases }
    }

    /// `GET /products`
    #[instrument(skip_all)]
    pub fn list(&self) -> ControllerResponse<Vec<Product>> {
        match self.use_cases.list_products.execute() {
            Ok(products) => ControllerResponse::ok(products),
            Err(e) => failure(e, "Error fetching products"),
        }
    }

    /// `GET /products/{id}`
    #[instrument(skip(self))]
    pub fn get_by_id(&self, id: &str) -> ControllerResponse<Product> {
        match self.use_cases.get_product.execute(&ProductId::new(id)) {
            Ok(Some(product)) => ControllerResponse::ok(product),
            Ok(None) => not_found(id),
            Err(e) => failure(e, "Error fetching product"),
        }
    }

    /// `POST /products`
    #[instrument(skip_all)]
    pub fn create(&self, input: ProductInput) -> ControllerResponse<Product> {
        let dto = match input.into_create() {
            Ok(dto) => dto,
            Err(e) => {
                debug!(error = %e, "Malformed create request");
                return ControllerResponse::error(StatusCode::BAD_REQUEST, e.to_string());
            }
        };

        match self.use_cases.create_product.execute(dto) {
            Ok(product) => ControllerResponse::created(product),
            Err(e) => failure(e, "Error creating product"),
        }
    }

    /// `PUT /products/{id}`
    #[instrument(skip(self, input))]
    pub fn update(&self, id: &str, input: ProductInput) -> ControllerResponse<Product> {
        match self
            .use_cases
            .update_product
            .execute(&ProductId::new(id), input.into())
        {
            Ok(Some(product)) => ControllerResponse::ok(product),
            Ok(None) => not_found(id),
            Err(e) => failure(e, "Error updating product"),
        }
    }

    /// `DELETE /products/{id}`
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> ControllerResponse<()> {
        match self.use_cases.delete_product.execute(&ProductId::new(id)) {
            Ok(true) => ControllerResponse::message(StatusCode::OK, DELETED),
            Ok(false) => not_found(id),
            Err(e) => failure(e, "Error deleting product"),
        }
    }
}

fn not_found<T>(id: &str) -> ControllerResponse<T> {
    debug!(id, "Product not found");
    ControllerResponse::error(StatusCode::NOT_FOUND, NOT_FOUND)
}

/// Validation errors keep their message (400). Anything else is logged and
/// replaced by `generic` (500).
fn failure<T>(err: CatalogError, generic: &str) -> ControllerResponse<T> {
    match (err.category(), err.public_message()) {
        (ErrorCategory::Validation, Some(message)) => {
            warn!(error = %err, "Request rejected");
            ControllerResponse::error(StatusCode::BAD_REQUEST, message)
        }
        _ => {
            error!(error = %err, "Unexpected failure");
            ControllerResponse::error(StatusCode::INTERNAL_SERVER_ERROR, generic)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use mockall::mock;

    use super::*;
    use catalog_core::{
        application::{ApplicationError, ports::ProductRepository},
        error::CatalogResult,
    };

    mock! {
        Repo {}

        impl ProductRepository for Repo {
            fn find_all(&self) -> CatalogResult<Vec<Product>>;
            fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>>;
            fn create(&self, input: CreateProductDto) -> CatalogResult<Product>;
            fn update(&self, id: &ProductId, patch: UpdateProductDto) -> CatalogResult<Option<Product>>;
            fn delete(&self, id: &ProductId) -> CatalogResult<bool>;
        }
    }

    fn controller(repo: MockRepo) -> ProductController {
        ProductController::new(ProductUseCases::new(Arc::new(repo)))
    }

    fn broken() -> CatalogError {
        ApplicationError::Storage {
            reason: "disk on fire at /var/lib/catalog".into(),
        }
        .into()
    }

    fn sample(id: &str) -> Product {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Product {
            id: ProductId::new(id),
            name: "Mouse".into(),
            description: String::new(),
            price: 29.99,
            stock: 50,
            created_at: at,
            updated_at: at,
        }
    }

    // ── input shape ───────────────────────────────────────────────────────

    #[test]
    fn into_create_lists_missing_fields() {
        let err = ProductInput {
            name: Some("  ".into()),
            price: Some(1.0),
            ..Default::default()
        }
        .into_create()
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::MissingRequiredFields {
                fields: vec!["name", "stock"]
            }
        );
    }

    #[test]
    fn into_create_defaults_description() {
        let dto = ProductInput {
            name: Some("Mouse".into()),
            price: Some(29.99),
            stock: Some(50),
            ..Default::default()
        }
        .into_create()
        .unwrap();

        assert_eq!(dto.description, "");
    }

    // ── status mapping ────────────────────────────────────────────────────

    #[test]
    fn missing_fields_never_reach_use_case() {
        let mut repo = MockRepo::new();
        repo.expect_create().never();

        let response = controller(repo).create(ProductInput::default());
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body.error.as_deref(),
            Some("Missing required fields: name, price, stock")
        );
    }

    #[test]
    fn create_returns_201() {
        let mut repo = MockRepo::new();
        repo.expect_create().returning(|_| Ok(sample("42")));

        let response = controller(repo).create(ProductInput {
            name: Some("Mouse".into()),
            description: Some(String::new()),
            price: Some(29.99),
            stock: Some(50),
        });

        assert_eq!(response.status, StatusCode::CREATED);
        assert!(response.is_success());
        assert_eq!(response.body.data.unwrap().id.as_str(), "42");
    }

    #[test]
    fn validation_failure_is_400_with_rule() {
        let mut repo = MockRepo::new();
        repo.expect_update().never();

        let response = controller(repo).update(
            "1",
            ProductInput {
                price: Some(-5.0),
                ..Default::default()
            },
        );

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(
            response
                .body
                .error
                .unwrap()
                .contains("Price cannot be negative")
        );
    }

    #[test]
    fn absent_product_is_404() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().returning(|_, _| Ok(None));
        repo.expect_delete().returning(|_| Ok(false));
        let controller = controller(repo);

        for response in [
            controller.get_by_id("999").map(|_| ()),
            controller.update("999", ProductInput::default()).map(|_| ()),
            controller.remove("999"),
        ] {
            assert_eq!(response.status, StatusCode::NOT_FOUND);
            assert!(!response.body.success);
            assert_eq!(response.body.error.as_deref(), Some(NOT_FOUND));
        }
    }

    #[test]
    fn unexpected_errors_are_500_without_details() {
        let mut repo = MockRepo::new();
        repo.expect_find_all().returning(|| Err(broken()));
        repo.expect_find_by_id().returning(|_| Err(broken()));
        repo.expect_create().returning(|_| Err(broken()));
        repo.expect_update().returning(|_, _| Err(broken()));
        repo.expect_delete().returning(|_| Err(broken()));
        let controller = controller(repo);

        let valid = ProductInput {
            name: Some("Mouse".into()),
            price: Some(1.0),
            stock: Some(1),
            ..Default::default()
        };

        for response in [
            controller.list().map(|_| ()),
            controller.get_by_id("1").map(|_| ()),
            controller.create(valid.clone()).map(|_| ()),
            controller.update("1", valid).map(|_| ()),
            controller.remove("1"),
        ] {
            assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
            let error = response.body.error.unwrap();
            assert!(error.starts_with("Error "));
            assert!(!error.contains("/var/lib"));
        }
    }

    #[test]
    fn remove_confirms_with_message() {
        let mut repo = MockRepo::new();
        repo.expect_delete().returning(|_| Ok(true));

        let response = controller(repo).remove("1");
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.message.as_deref(), Some(DELETED));
        assert!(response.body.data.is_none());
    }
}
