use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};

use super::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError>;
    /// Returns the categories that exist among `ids`; missing ids are skipped.
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Category>, RepositoryError>;
    async fn get_page(&self, request: &PageRequest) -> Result<Page<Category>, RepositoryError>;
    /// Fails with `Duplicated` when the name is already taken.
    async fn insert(&self, name: &str) -> Result<Category, RepositoryError>;
    /// Fails with `NotFound` for an unknown id and `Duplicated` on a name clash.
    async fn update(&self, category: &Category) -> Result<Category, RepositoryError>;
    /// Fails with `NotFound` for an unknown id and `ForeignKeyViolation` while
    /// any product still references the category.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
