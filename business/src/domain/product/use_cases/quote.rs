use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::quotation::ProductQuotation;

pub struct QuoteProductParams {
    pub product_id: i64,
    /// Target currency as typed by the caller; normalized by the use case.
    pub currency_code: String,
}

/// Prices a product in another currency using the live exchange rate.
#[async_trait]
pub trait QuoteProductUseCase: Send + Sync {
    async fn execute(&self, params: QuoteProductParams) -> Result<ProductQuotation, ProductError>;
}
