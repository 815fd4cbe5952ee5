/// Repository errors for domain layer.
/// Constraint violations are reported as their own variants so each aggregate
/// can translate them into its own conflict error.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.foreign_key_violation")]
    ForeignKeyViolation,
    #[error("repository.database_error")]
    DatabaseError,
}
