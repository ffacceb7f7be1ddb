use crate::domain::{
    entities::{CreateProductDto, UpdateProductDto},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across use cases.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_new_product(input: &CreateProductDto) -> Result<(), DomainError> {
        input.validate()
    }

    pub fn validate_product_patch(patch: &UpdateProductDto) -> Result<(), DomainError> {
        patch.validate()
    }
}
