//! Infrastructure adapters for the catalog.
//!
//! This crate implements the ports defined in `catalog-core::application::ports`
//! and the driving side (controller, router) that transports call into.
//! It also hosts the composition root that wires everything together.

pub mod composition;
pub mod controller;
pub mod repository;
pub mod seed;
pub mod store;
pub mod system;

// Re-export commonly used adapters
pub use composition::{Catalog, CatalogBuilder};
pub use controller::{ControllerResponse, ProductController, ProductInput, ResponseBody, Router};
pub use repository::{ProductRecord, ProductRepositoryAdapter};
pub use store::{InMemoryStore, RecordStore};
pub use system::{ManualClock, SequentialIdGenerator, SystemClock, UuidGenerator};
