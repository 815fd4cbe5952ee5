use crate::domain::shared::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("One or more fields failed validation")]
    Validation(Vec<FieldViolation>),
    #[error("Product not found with id {0}")]
    NotFound(i64),
    #[error("Category not found with id {0}, operation failed")]
    CategoryNotFound(i64),
    #[error("One or more fields in the product are causing an integrity error")]
    Integrity,
    #[error("{0}")]
    ExchangeRateUnavailable(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
