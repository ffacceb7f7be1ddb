//! Catalog Core - Clean Architecture Implementation
//!
//! This crate provides the domain and application layers for the product
//! catalog, following clean (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      catalog-cli (Driving Adapter)      │
//! │   (Arguments, Output, Exit Codes)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   catalog-adapters::ProductController   │
//! │   (Request → Use Case → {status, body}) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │             Use Cases                   │
//! │  (List/Get/Create/Update/DeleteProduct) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (ProductRepository, Clock, IdGen)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   catalog-adapters (Infrastructure)     │
//! │ (ProductRepositoryAdapter, MemoryStore) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use catalog_core::prelude::*;
//!
//! # fn run(repository: Arc<dyn ProductRepository>) -> CatalogResult<()> {
//! let use_cases = ProductUseCases::new(repository);
//!
//! let product = use_cases.create_product.execute(CreateProductDto {
//!     name: "Mouse".into(),
//!     description: String::new(),
//!     price: 29.99,
//!     stock: 50,
//! })?;
//!
//! assert!(use_cases.get_product.execute(&product.id)?.is_some());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProductUseCases,
        ports::{Clock, IdGenerator, ProductRepository},
        use_cases::{CreateProduct, DeleteProduct, GetProduct, ListProducts, UpdateProduct},
    };
    pub use crate::domain::{CreateProductDto, Product, ProductId, UpdateProductDto};
    pub use crate::error::{CatalogError, CatalogResult};
}
