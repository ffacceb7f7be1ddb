// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the catalog.
//!
//! This module contains pure business logic. Storage, time, and id
//! generation are reached through ports (traits) defined in the
//! application layer.
//!
//! ## Clean Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or storage calls
//! - **Few crates**: std, thiserror, serde, chrono
//! - **Plain data**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::product::{CreateProductDto, Product, ProductId, UpdateProductDto};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;
