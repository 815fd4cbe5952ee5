use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::BASE_CURRENCY;
use crate::domain::product::quotation::{CurrencyCode, ProductQuotation, convert_price};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ExchangeRateService;
use crate::domain::product::use_cases::quote::{QuoteProductParams, QuoteProductUseCase};

pub struct QuoteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub exchange_rate_service: Arc<dyn ExchangeRateService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl QuoteProductUseCase for QuoteProductUseCaseImpl {
    async fn execute(&self, params: QuoteProductParams) -> Result<ProductQuotation, ProductError> {
        let currency_code = CurrencyCode::parse(&params.currency_code)
            .map_err(|violation| ProductError::Validation(vec![violation]))?;

        self.logger.info(&format!(
            "Quoting product {} in {}",
            params.product_id, currency_code
        ));

        // Look the product up first: an unknown id never reaches the provider.
        let product = self
            .repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(params.product_id),
                other => ProductError::Repository(other),
            })?;

        let rate = self
            .exchange_rate_service
            .get_conversion_rate(BASE_CURRENCY, currency_code.as_str())
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Exchange rate lookup failed: {}", e));
                ProductError::ExchangeRateUnavailable(e.to_string())
            })?;

        let converted_price = convert_price(product.price, rate).ok_or_else(|| {
            ProductError::ExchangeRateUnavailable(format!(
                "Conversion rate {} overflows price {}",
                rate, product.price
            ))
        })?;

        Ok(ProductQuotation {
            product_id: product.id,
            product_name: product.name,
            original_price: product.price,
            converted_price,
            currency_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::services::ExchangeRateError;
    use crate::test_support::{MockExchangeRate, MockProductRepo, category, mock_logger, persisted};
    use rust_decimal::Decimal;

    fn hundred_reais(id: i64) -> crate::domain::product::model::Product {
        persisted(
            id,
            &NewProduct {
                name: "Computer".to_string(),
                description: "A new computer".to_string(),
                price: Decimal::new(10000, 2),
                image_url: None,
                categories: vec![category(1, "Electronics")],
            },
        )
    }

    fn use_case(mock_repo: MockProductRepo, mock_rates: MockExchangeRate) -> QuoteProductUseCaseImpl {
        QuoteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            exchange_rate_service: Arc::new(mock_rates),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_convert_price_with_normalized_currency() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(hundred_reais(id)));

        let mut mock_rates = MockExchangeRate::new();
        mock_rates
            .expect_get_conversion_rate()
            .withf(|base, target| base == "BRL" && target == "USD")
            .times(1)
            .returning(|_, _| Ok(Decimal::new(20, 2)));

        let quotation = use_case(mock_repo, mock_rates)
            .execute(QuoteProductParams {
                product_id: 1,
                currency_code: "usd".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(quotation.product_name, "Computer");
        assert_eq!(quotation.original_price, Decimal::new(10000, 2));
        assert_eq!(quotation.converted_price, Decimal::new(2000, 2));
        assert_eq!(quotation.currency_code.as_str(), "USD");
    }

    #[tokio::test]
    async fn should_not_call_provider_for_unknown_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let mut mock_rates = MockExchangeRate::new();
        mock_rates.expect_get_conversion_rate().never();

        let result = use_case(mock_repo, mock_rates)
            .execute(QuoteProductParams {
                product_id: 55,
                currency_code: "EUR".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(55))));
    }

    #[tokio::test]
    async fn should_report_unavailable_when_provider_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(hundred_reais(id)));

        let mut mock_rates = MockExchangeRate::new();
        mock_rates.expect_get_conversion_rate().returning(|_, _| {
            Err(ExchangeRateError::UnexpectedStatus {
                status: 503,
                body: "maintenance".to_string(),
            })
        });

        let result = use_case(mock_repo, mock_rates)
            .execute(QuoteProductParams {
                product_id: 1,
                currency_code: "EUR".to_string(),
            })
            .await;

        match result {
            Err(ProductError::ExchangeRateUnavailable(message)) => {
                assert!(message.contains("503"))
            }
            other => panic!("expected unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_reject_malformed_currency_before_lookup() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();

        let result = use_case(mock_repo, MockExchangeRate::new())
            .execute(QuoteProductParams {
                product_id: 1,
                currency_code: "dollars".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }
}
