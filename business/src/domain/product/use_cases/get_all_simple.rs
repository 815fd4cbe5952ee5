use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct GetAllProductsSimpleParams {
    pub page: PageRequest,
}

/// Unfiltered product listing.
#[async_trait]
pub trait GetAllProductsSimpleUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllProductsSimpleParams,
    ) -> Result<Page<Product>, ProductError>;
}
