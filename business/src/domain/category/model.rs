use super::errors::CategoryError;
use crate::domain::shared::validation::Violations;

/// Properties a category page can be sorted by.
pub const CATEGORY_SORT_PROPERTIES: &[&str] = &["id", "name"];
pub const CATEGORY_DEFAULT_SORT: &str = "name";
/// Length of the `category.name` column.
pub const CATEGORY_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, name: String) -> Self {
        Self { id, name }
    }

    /// Validates a category name for insert or rename.
    ///
    /// Surrounding whitespace is dropped so " Books" and "Books" collide on
    /// the unique constraint.
    pub fn validate_name(name: &str) -> Result<String, CategoryError> {
        let mut violations = Violations::new();
        violations.require_not_blank("name", name, "The field 'name' cannot be empty");
        violations.require_max_length(
            "name",
            name,
            CATEGORY_NAME_MAX_LENGTH,
            "The field 'name' cannot exceed 100 characters",
        );
        violations
            .into_result()
            .map_err(CategoryError::Validation)?;

        Ok(name.trim().to_string())
    }
}
