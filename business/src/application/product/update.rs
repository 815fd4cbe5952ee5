use std::sync::Arc;

use async_trait::async_trait;

use super::category_resolver::CategoryResolver;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_resolver: CategoryResolver,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let id = params.id;
        self.logger.info(&format!("Updating product: {}", id));

        params.product.validate()?;
        // An unknown product is reported ahead of unknown categories.
        self.repository.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ProductError::NotFound(id),
            other => ProductError::Repository(other),
        })?;

        let categories = self
            .category_resolver
            .resolve(&params.product.category_ids)
            .await?;
        let new_product = params.product.into_new_product(categories);

        // The repository replaces the whole category set, so links absent
        // from the request are dropped.
        let product = self
            .repository
            .update(id, &new_product)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(id),
                RepositoryError::ForeignKeyViolation | RepositoryError::Duplicated => {
                    ProductError::Integrity
                }
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product updated: {}", id));
        Ok(product)
    }
}
