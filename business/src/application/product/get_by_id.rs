use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .debug(&format!("Fetching product: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(params.id),
                other => ProductError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProduct;
    use crate::test_support::{MockProductRepo, category, mock_logger, persisted};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn should_return_product_with_categories() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(persisted(
                id,
                &NewProduct {
                    name: "X-Burger".to_string(),
                    description: "A burger with cheese".to_string(),
                    price: Decimal::new(2099, 2),
                    image_url: None,
                    categories: vec![category(9, "Food")],
                },
            ))
        });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams { id: 2 })
            .await
            .unwrap();

        assert_eq!(product.id, 2);
        assert_eq!(product.categories, vec![category(9, "Food")]);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 404 }).await;
        assert!(matches!(result, Err(ProductError::NotFound(404))));
    }
}
