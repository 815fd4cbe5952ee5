use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFilter};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all_simple::{
    GetAllProductsSimpleParams, GetAllProductsSimpleUseCase,
};
use crate::domain::shared::pagination::Page;

pub struct GetAllProductsSimpleUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsSimpleUseCase for GetAllProductsSimpleUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllProductsSimpleParams,
    ) -> Result<Page<Product>, ProductError> {
        self.logger.debug(&format!(
            "Listing all products: page {} size {}",
            params.page.page, params.page.size
        ));

        Ok(self
            .repository
            .get_page(&ProductFilter::default(), &params.page)
            .await?)
    }
}
