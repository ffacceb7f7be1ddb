//! Application ports (traits) for external dependencies.
//!
//! Ports define interfaces that the application needs from the outside
//! world. Adapters in `catalog-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProductRepository`: Product persistence
//!   - `Clock`: Current time for timestamps
//!   - `IdGenerator`: Fresh product ids
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - The use cases in `crate::application::use_cases`

pub mod output;

pub use output::{Clock, IdGenerator, ProductRepository};
