use business::domain::errors::RepositoryError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Translates a sqlx failure into the repository error the domain understands.
pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_error) => {
            match db_error.code().as_deref().and_then(classify_sqlstate) {
                Some(mapped) => mapped,
                None => {
                    tracing::error!("Database error: {}", db_error);
                    RepositoryError::DatabaseError
                }
            }
        }
        _ => {
            tracing::error!("Database error: {}", error);
            RepositoryError::DatabaseError
        }
    }
}

fn classify_sqlstate(code: &str) -> Option<RepositoryError> {
    match code {
        UNIQUE_VIOLATION => Some(RepositoryError::Duplicated),
        FOREIGN_KEY_VIOLATION => Some(RepositoryError::ForeignKeyViolation),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_constraint_violations() {
        assert!(matches!(
            classify_sqlstate("23505"),
            Some(RepositoryError::Duplicated)
        ));
        assert!(matches!(
            classify_sqlstate("23503"),
            Some(RepositoryError::ForeignKeyViolation)
        ));
        assert!(classify_sqlstate("42P01").is_none());
    }

    #[test]
    fn should_map_missing_row_to_not_found() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        ));
    }

    #[test]
    fn should_map_pool_failures_to_database_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            RepositoryError::DatabaseError
        ));
    }
}
