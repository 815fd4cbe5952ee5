use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::pagination::Page;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ProductError> {
        self.logger.debug(&format!(
            "Listing products: name={:?} category={:?} page {} size {}",
            params.filter.product_name,
            params.filter.category_name,
            params.page.page,
            params.page.size
        ));

        Ok(self
            .repository
            .get_page(&params.filter, &params.page)
            .await?)
    }
}
