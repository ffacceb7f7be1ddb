//! Use cases - one struct per catalog operation.
//!
//! Each use case wraps exactly one repository call. Only create and update
//! carry business validation; the rest are passthroughs kept as separate
//! types so the controller depends on operations, not on the repository.

use std::sync::Arc;

use crate::application::ports::ProductRepository;

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod update_product;

pub use create_product::CreateProduct;
pub use delete_product::DeleteProduct;
pub use get_product::GetProduct;
pub use list_products::ListProducts;
pub use update_product::UpdateProduct;

/// The five product use cases, built over one repository.
#[derive(Clone)]
pub struct ProductUseCases {
    pub list_products: ListProducts,
    pub get_product: GetProduct,
    pub create_product: CreateProduct,
    pub update_product: UpdateProduct,
    pub delete_product: DeleteProduct,
}

impl ProductUseCases {
    /// Wire every use case to the same repository.
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            list_products: ListProducts::new(Arc::clone(&repository)),
            get_product: GetProduct::new(Arc::clone(&repository)),
            create_product: CreateProduct::new(Arc::clone(&repository)),
            update_product: UpdateProduct::new(Arc::clone(&repository)),
            delete_product: DeleteProduct::new(repository),
        }
    }
}
