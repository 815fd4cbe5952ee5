use crate::domain::shared::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("One or more fields failed validation")]
    Validation(Vec<FieldViolation>),
    #[error("Category not found with id {0}")]
    NotFound(i64),
    #[error("Category name '{0}' already exists")]
    NameAlreadyExists(String),
    #[error("Category {0} is still linked to one or more products")]
    InUse(i64),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
