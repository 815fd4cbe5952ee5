use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Updating category: {}", params.id));

        let name = Category::validate_name(&params.name)?;
        let category = Category::from_repository(params.id, name);

        let updated = self
            .repository
            .update(&category)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound(params.id),
                RepositoryError::Duplicated => {
                    CategoryError::NameAlreadyExists(category.name.clone())
                }
                other => CategoryError::Repository(other),
            })?;

        self.logger
            .info(&format!("Category updated: {}", updated.id));
        Ok(updated)
    }
}
