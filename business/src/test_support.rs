use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use rust_decimal::Decimal;

use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product, ProductFilter, ProductProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::{ExchangeRateError, ExchangeRateService};
use crate::domain::shared::pagination::{Page, PageRequest};

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError>;
        async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Category>, RepositoryError>;
        async fn get_page(&self, request: &PageRequest) -> Result<Page<Category>, RepositoryError>;
        async fn insert(&self, name: &str) -> Result<Category, RepositoryError>;
        async fn update(&self, category: &Category) -> Result<Category, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
        async fn get_page(
            &self,
            filter: &ProductFilter,
            request: &PageRequest,
        ) -> Result<Page<Product>, RepositoryError>;
        async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn update(&self, id: i64, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ExchangeRate {}

    #[async_trait]
    impl ExchangeRateService for ExchangeRate {
        async fn get_conversion_rate(
            &self,
            base: &str,
            target: &str,
        ) -> Result<Decimal, ExchangeRateError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn category(id: i64, name: &str) -> Category {
    Category::from_repository(id, name.to_string())
}

pub fn product_props(category_ids: Vec<i64>) -> ProductProps {
    ProductProps {
        name: "Smart Home Speaker".to_string(),
        description: "Voice-controlled smart speaker".to_string(),
        price: Decimal::new(12999, 2),
        image_url: None,
        category_ids,
    }
}

/// Mirrors what a repository returns after persisting `product` under `id`.
pub fn persisted(id: i64, product: &NewProduct) -> Product {
    Product::from_repository(
        id,
        product.name.clone(),
        product.description.clone(),
        product.price,
        product.image_url.clone(),
        product.categories.clone(),
    )
}
