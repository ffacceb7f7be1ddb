//! Application layer for the catalog.
//!
//! This layer contains:
//! - **Use cases**: one struct per operation (list, get, create, update, delete)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Business rules live
//! in `crate::domain`; the use cases only decide when to apply them.

pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export main use cases
pub use use_cases::{
    CreateProduct, DeleteProduct, GetProduct, ListProducts, ProductUseCases, UpdateProduct,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, IdGenerator, ProductRepository};

pub use error::ApplicationError;
