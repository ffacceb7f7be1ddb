pub mod product;

pub use crate::domain::DomainError;
pub use product::{CreateProductDto, Product, ProductId, UpdateProductDto};
