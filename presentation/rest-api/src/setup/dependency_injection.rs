use std::sync::Arc;

use exchange_rate::client::ExchangeRateClient;
use exchange_rate::exchange_rate_api::ExchangeRateApi;
use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::product::category_resolver::CategoryResolver;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_all_simple::GetAllProductsSimpleUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::quote::QuoteProductUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub category_api: CategoryApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let exchange_rate_client = ExchangeRateClient::new(config.exchange_rate.clone())?;
        let exchange_rate_service = Arc::new(ExchangeRateApi::new(exchange_rate_client));

        // Category use cases
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_category_by_id_use_case = Arc::new(GetCategoryByIdUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let update_category_use_case = Arc::new(UpdateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let delete_category_use_case = Arc::new(DeleteCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_resolver: CategoryResolver {
                category_repository: category_repository.clone(),
            },
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products_simple_use_case = Arc::new(GetAllProductsSimpleUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_resolver: CategoryResolver {
                category_repository,
            },
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let quote_product_use_case = Arc::new(QuoteProductUseCaseImpl {
            repository: product_repository,
            exchange_rate_service,
            logger,
        });

        let category_api = CategoryApi::new(
            create_category_use_case,
            get_all_categories_use_case,
            get_category_by_id_use_case,
            update_category_use_case,
            delete_category_use_case,
        );

        let product_api = ProductApi::new(
            create_product_use_case,
            get_all_products_use_case,
            get_all_products_simple_use_case,
            get_product_by_id_use_case,
            update_product_use_case,
            delete_product_use_case,
            quote_product_use_case,
        );

        Ok(Self {
            health_api,
            category_api,
            product_api,
        })
    }
}
