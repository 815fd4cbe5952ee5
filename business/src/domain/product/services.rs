use async_trait::async_trait;
use rust_decimal::Decimal;

/// Failure modes of the exchange-rate provider.
///
/// Callers treat every variant the same way (the dependency is unavailable);
/// the distinction only matters for logs.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeRateError {
    #[error("External currency API error (HTTP status {status}): {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("Failed to retrieve conversion rate from external API: response was missing a valid 'conversion_rate'")]
    MissingRate,
    #[error("Failed to connect to external currency API: {0}")]
    Connection(String),
}

/// Service port for looking up the conversion rate between two currencies.
#[async_trait]
pub trait ExchangeRateService: Send + Sync {
    /// Returns how many units of `target` one unit of `base` buys.
    async fn get_conversion_rate(
        &self,
        base: &str,
        target: &str,
    ) -> Result<Decimal, ExchangeRateError>;
}
