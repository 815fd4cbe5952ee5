use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct GetAllCategoriesParams {
    pub page: PageRequest,
}

#[async_trait]
pub trait GetAllCategoriesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllCategoriesParams,
    ) -> Result<Page<Category>, CategoryError>;
}
