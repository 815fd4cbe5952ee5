use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};

use super::model::{NewProduct, Product, ProductFilter};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Loads the product together with its categories.
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Products matching `filter`, each listed once, with categories loaded.
    async fn get_page(
        &self,
        filter: &ProductFilter,
        request: &PageRequest,
    ) -> Result<Page<Product>, RepositoryError>;
    /// Persists the product and its category links in one transaction.
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    /// Overwrites the product and replaces its category links in one
    /// transaction. Fails with `NotFound` for an unknown id, leaving nothing
    /// changed.
    async fn update(&self, id: i64, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
