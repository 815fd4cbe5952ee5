use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFilter};
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct GetAllProductsParams {
    pub filter: ProductFilter,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ProductError>;
}
