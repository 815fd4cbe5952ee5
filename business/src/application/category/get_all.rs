use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::{
    GetAllCategoriesParams, GetAllCategoriesUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::pagination::Page;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllCategoriesParams,
    ) -> Result<Page<Category>, CategoryError> {
        self.logger.debug(&format!(
            "Listing categories: page {} size {} sort {},{}",
            params.page.page, params.page.size, params.page.sort.property, params.page.sort.direction
        ));

        Ok(self.repository.get_page(&params.page).await?)
    }
}
