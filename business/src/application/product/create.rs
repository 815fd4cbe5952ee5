use std::sync::Arc;

use async_trait::async_trait;

use super::category_resolver::CategoryResolver;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_resolver: CategoryResolver,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.product.name));

        params.product.validate()?;
        let categories = self
            .category_resolver
            .resolve(&params.product.category_ids)
            .await?;
        let new_product = params.product.into_new_product(categories);

        let product = self
            .repository
            .insert(&new_product)
            .await
            .map_err(|e| match e {
                RepositoryError::ForeignKeyViolation | RepositoryError::Duplicated => {
                    ProductError::Integrity
                }
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rust_decimal::Decimal;

    use super::*;
    use crate::test_support::{
        MockCategoryRepo, MockProductRepo, category, mock_logger, persisted, product_props,
    };

    fn use_case(
        mock_repo: MockProductRepo,
        mock_categories: MockCategoryRepo,
    ) -> CreateProductUseCaseImpl {
        CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_resolver: CategoryResolver {
                category_repository: Arc::new(mock_categories),
            },
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_create_product_linked_to_exactly_the_requested_categories() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_get_by_ids()
            .returning(|_| Ok(vec![category(1, "Electronics"), category(4, "Home")]));

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .withf(|p| p.category_ids() == vec![1, 4] && p.name == "Smart Home Speaker")
            .times(1)
            .returning(|p| Ok(persisted(10, p)));

        let created = use_case(mock_repo, mock_categories)
            .execute(CreateProductParams {
                product: product_props(vec![4, 1, 1]),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 10);
        assert_eq!(created.category_ids(), BTreeSet::from([1, 4]));
    }

    #[tokio::test]
    async fn should_not_insert_anything_when_a_category_is_missing() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_get_by_ids()
            .returning(|_| Ok(vec![category(1, "Electronics")]));

        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let result = use_case(mock_repo, mock_categories)
            .execute(CreateProductParams {
                product: product_props(vec![1, 999]),
            })
            .await;

        assert!(matches!(result, Err(ProductError::CategoryNotFound(999))));
    }

    #[tokio::test]
    async fn should_reject_invalid_product_before_resolving_categories() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories.expect_get_by_ids().never();

        let mut props = product_props(vec![]);
        props.name = "".to_string();

        let result = use_case(MockProductRepo::new(), mock_categories)
            .execute(CreateProductParams { product: props })
            .await;

        match result {
            Err(ProductError::Validation(violations)) => assert_eq!(violations.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_reject_values_the_product_table_cannot_hold() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories.expect_get_by_ids().never();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let mut props = product_props(vec![1]);
        props.description = "d".repeat(256);
        props.price = Decimal::new(10_000_000_000, 0);

        let result = use_case(mock_repo, mock_categories)
            .execute(CreateProductParams { product: props })
            .await;

        match result {
            Err(ProductError::Validation(violations)) => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["description", "price"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_map_foreign_key_race_to_integrity_error() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_get_by_ids()
            .returning(|_| Ok(vec![category(1, "Electronics")]));

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::ForeignKeyViolation));

        let result = use_case(mock_repo, mock_categories)
            .execute(CreateProductParams {
                product: product_props(vec![1]),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Integrity)));
    }
}
