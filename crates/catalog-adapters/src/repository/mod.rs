//! Repository adapters: domain entities in, store records out.

mod product;

pub use product::{ProductRecord, ProductRecordPatch, ProductRepositoryAdapter};
pub(crate) use product::format_timestamp;
